//! Extraction of the `result` payload from an agent tool response.
//!
//! The response is a JSON object whose `result` field holds the text the agent produced.
//! The payload may be wrapped in a single markdown fence that spans the whole (trimmed)
//! string; [`Fence::detect`] recognises that shape and nothing else. Fences embedded in the
//! middle of the text are never touched.

use crate::errors::ExtractError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::path::Path;

/// Name of the string field carrying the payload.
pub const RESULT_FIELD: &str = "result";

/// Prefixes accepted as the start of a unified diff (after leading whitespace).
pub const DIFF_PREFIXES: [&str; 2] = ["--- ", "diff --git "];

lazy_static! {
    /// Opening fence with optional label, body, closing fence. Anchored at both ends.
    static ref OUTER_FENCE: Regex =
        Regex::new(r"\A```(?P<label>[A-Za-z0-9_-]*)\n(?P<body>(?s:.*?))\n```\z").unwrap();
}

/// Shape check applied to the extracted payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expectation {
    #[default]
    Any,
    Diff,
    Json,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Any => "any",
            Self::Diff => "diff",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub expect: Expectation,
    pub strip_fences: bool,
}

/// Result of looking for one outer fence around a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence<'a> {
    Fenced {
        /// Language tag on the opening line, `None` when empty.
        label: Option<&'a str>,
        body: &'a str,
    },
    Unfenced,
}

impl<'a> Fence<'a> {
    /// Matches the whole trimmed payload against the fence pattern.
    pub fn detect(payload: &'a str) -> Self {
        let Some(caps) = OUTER_FENCE.captures(payload.trim()) else {
            return Self::Unfenced;
        };
        let label = caps
            .name("label")
            .map(|m| m.as_str())
            .filter(|l| !l.is_empty());
        let body = caps.name("body").map_or("", |m| m.as_str());
        Self::Fenced { label, body }
    }

    pub fn is_fenced(&self) -> bool {
        matches!(self, Self::Fenced { .. })
    }

    /// The fenced body, or `original` when unfenced.
    pub fn body_or(self, original: &'a str) -> &'a str {
        match self {
            Self::Fenced { body, .. } => body,
            Self::Unfenced => original,
        }
    }
}

/// Returns the fenced body, or the original untrimmed payload when no outer fence matches.
pub fn strip_fences(payload: &str) -> &str {
    Fence::detect(payload).body_or(payload)
}

/// Checks `output` against the requested shape. Parsed JSON is discarded.
pub fn validate(output: &str, expect: Expectation) -> Result<(), ExtractError> {
    match expect {
        Expectation::Any => Ok(()),
        Expectation::Json => serde_json::from_str::<serde_json::Value>(output)
            .map(|_| ())
            .map_err(|e| ExtractError::validation(format!("Result is not valid JSON: {e}"))),
        Expectation::Diff => {
            let normalized = output.trim_start();
            if DIFF_PREFIXES.iter().any(|p| normalized.starts_with(p)) {
                Ok(())
            } else {
                Err(ExtractError::validation(
                    "Result does not look like a unified diff",
                ))
            }
        }
    }
}

/// Extracts the payload from a raw tool response.
///
/// The returned text is ready to be written out: it always ends with exactly the newline
/// the payload carried, or one appended newline if it had none.
pub fn extract_from_str(raw: &str, opts: &ExtractOptions) -> Result<String, ExtractError> {
    let parsed: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| ExtractError::Parse { source })?;

    let payload = parsed
        .get(RESULT_FIELD)
        .and_then(serde_json::Value::as_str)
        .ok_or(ExtractError::Schema)?;

    let output = if opts.strip_fences {
        let fence = Fence::detect(payload);
        tracing::debug!(fenced = fence.is_fenced(), "fence detection");
        fence.body_or(payload)
    } else {
        payload
    };

    validate(output, opts.expect)?;

    let mut out = output.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Reads `path` and extracts its payload.
pub fn extract_file(path: &Path, opts: &ExtractOptions) -> Result<String, ExtractError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        bytes = raw.len(),
        expect = %opts.expect,
        strip_fences = opts.strip_fences,
        "extracting tool result"
    );
    extract_from_str(&raw, opts)
}
