//! Input model for `cargo llvm-cov --json` exports.
//!
//! Only the fields the summary needs are modelled. Everything else in the export
//! (`segments`, `functions`, `branches` arrays, `expansions`, `type`, `version`) is ignored.
//! Absent and `null` containers decode as empty.

use super::contract::MetricKind;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

mod serde_null {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// `null` and absent both decode to `T::default()`.
    pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
    }

    /// Any non-string value decodes to `None`.
    pub fn string_or_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }
}

/// Top-level export document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageDocument {
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub data: Vec<ReportUnit>,
}

/// One element of `data`: a single coverage collection run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportUnit {
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub files: Vec<FileEntry>,
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub totals: MetricSummary,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileEntry {
    /// `None` when absent or not a string; such entries are never summarised.
    #[serde(default, deserialize_with = "serde_null::string_or_none")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub summary: MetricSummary,
}

/// A `summary` or `totals` object. Only the metrics in [`MetricKind::ALL`] are kept,
/// looked up under their llvm-cov key; other entries are ignored unread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSummary(BTreeMap<MetricKind, RawMetric>);

impl<'de> Deserialize<'de> for MetricSummary {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut entries = BTreeMap::<String, Value>::deserialize(d)?;
        let mut metrics = BTreeMap::new();
        for kind in MetricKind::ALL {
            let Some(value) = entries.remove(kind.source_key()) else {
                continue;
            };
            let metric = Option::<RawMetric>::deserialize(value)
                .map_err(|e| D::Error::custom(format!("{}: {e}", kind.source_key())))?;
            metrics.insert(kind, metric.unwrap_or_default());
        }
        Ok(Self(metrics))
    }
}

impl MetricSummary {
    /// Counters for `kind`. Missing entries count as zero.
    pub fn metric(&self, kind: MetricKind) -> RawMetric {
        self.0.get(&kind).copied().unwrap_or_default()
    }
}

/// `count`/`covered` pair of one metric. Absent or `null` counters are zero; anything
/// other than a non-negative integer is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RawMetric {
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "serde_null::or_default")]
    pub covered: u64,
}
