//! Normalized `coverage-summary.json` output.
//!
//! Struct fields are declared in ascending key order so that serialization emits sorted keys
//! at every level; `files` is a `BTreeMap` for the same reason.

use super::contract::{MetricKind, BACKEND_MARKER, BACKEND_ROOT, SOURCE_EXTENSION};
use super::model::{CoverageDocument, MetricSummary, RawMetric};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Percentage rounded to two decimals. No measurable units counts as fully covered.
///
/// Rounding is applied to the exact binary value of `covered * 100 / total`, ties to even,
/// so `1/32` (3.125) gives 3.12 rather than 3.13.
pub fn percent(covered: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let raw = covered as f64 * 100.0 / total as f64;
    let rounded = format!("{raw:.2}").parse::<f64>().unwrap_or(raw);
    rounded.min(100.0)
}

/// Canonical summary key for a source path: rooted at the last `/backend/` segment when
/// present, otherwise the path unchanged.
pub fn normalize_path(path: &str) -> String {
    match path.rsplit_once(BACKEND_MARKER) {
        Some((_, suffix)) => format!("{BACKEND_ROOT}{suffix}"),
        None => path.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBlock {
    pub covered: u64,
    pub pct: f64,
    /// Not tracked by llvm-cov; always 0.
    pub skipped: u64,
    pub total: u64,
}

impl MetricBlock {
    pub fn from_raw(raw: RawMetric) -> Self {
        Self {
            covered: raw.covered,
            pct: percent(raw.covered, raw.count),
            skipped: 0,
            total: raw.count,
        }
    }
}

/// The four metric blocks of one file (or of the totals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FileMetrics {
    pub branches: MetricBlock,
    pub functions: MetricBlock,
    pub lines: MetricBlock,
    /// Built from llvm-cov `regions`, see [`MetricKind::Statements`].
    pub statements: MetricBlock,
}

impl FileMetrics {
    pub fn from_summary(summary: &MetricSummary) -> Self {
        let block = |kind| MetricBlock::from_raw(summary.metric(kind));
        Self {
            branches: block(MetricKind::Branches),
            functions: block(MetricKind::Functions),
            lines: block(MetricKind::Lines),
            statements: block(MetricKind::Statements),
        }
    }

    pub fn get(&self, kind: MetricKind) -> &MetricBlock {
        match kind {
            MetricKind::Lines => &self.lines,
            MetricKind::Functions => &self.functions,
            MetricKind::Branches => &self.branches,
            MetricKind::Statements => &self.statements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDocument {
    pub files: BTreeMap<String, FileMetrics>,
    pub total: FileMetrics,
}

impl SummaryDocument {
    /// One-line report of where the summary went and the total line coverage.
    pub fn confirmation(&self, dst: &Path) -> String {
        let lines = self.total.get(MetricKind::Lines);
        format!(
            "Wrote {} (lines: {}/{} = {:.2}%)",
            dst.display(),
            lines.covered,
            lines.total,
            lines.pct
        )
    }
}

/// Builds the summary from an export.
///
/// Files from every report unit are included (later duplicates win); `total` comes from
/// the first unit's `totals` only.
pub fn build_summary(doc: &CoverageDocument) -> SummaryDocument {
    let mut files = BTreeMap::new();
    let mut dropped = 0usize;

    for entry in doc.data.iter().flat_map(|unit| &unit.files) {
        let Some(filename) = entry
            .filename
            .as_deref()
            .filter(|f| f.ends_with(SOURCE_EXTENSION))
        else {
            dropped += 1;
            continue;
        };
        files.insert(
            normalize_path(filename),
            FileMetrics::from_summary(&entry.summary),
        );
    }

    let total = match doc.data.first() {
        Some(unit) => FileMetrics::from_summary(&unit.totals),
        None => FileMetrics::from_summary(&MetricSummary::default()),
    };

    tracing::debug!(
        units = doc.data.len(),
        kept = files.len(),
        dropped,
        "built coverage summary"
    );

    SummaryDocument { files, total }
}
