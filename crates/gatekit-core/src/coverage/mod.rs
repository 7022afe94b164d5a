//! llvm-cov JSON export to `coverage-summary.json` conversion.
//!
//! ```text
//! cargo llvm-cov --json > backend/llvm-cov.json
//! coverage-summary backend/llvm-cov.json coverage/coverage-summary.json
//! ```

pub mod contract;
pub mod model;
pub mod summary;

pub use contract::MetricKind;
pub use model::CoverageDocument;
pub use summary::{
    build_summary, normalize_path, percent, FileMetrics, MetricBlock, SummaryDocument,
};

use crate::errors::CoverageError;
use std::fmt::Write as _;
use std::path::Path;

/// Reads and decodes an export. A missing file is reported before any read is attempted.
pub fn load_document(src: &Path) -> Result<CoverageDocument, CoverageError> {
    if !src.exists() {
        return Err(CoverageError::MissingInput {
            path: src.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(src).map_err(|source| CoverageError::Read {
        path: src.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %src.display(), bytes = content.len(), "read coverage export");
    serde_json::from_str(&content).map_err(|source| CoverageError::Parse {
        path: src.to_path_buf(),
        source,
    })
}

/// Pretty (2-space), ASCII-only JSON with a trailing newline.
pub fn render_summary(summary: &SummaryDocument) -> Result<String, CoverageError> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|source| CoverageError::Serialize { source })?;
    let mut out = escape_non_ascii(&json);
    out.push('\n');
    Ok(out)
}

/// Rewrites every non-ASCII char as lowercase `\uXXXX` UTF-16 escapes.
///
/// Non-ASCII can only occur inside string literals of serialized JSON, so the result is
/// still the same document.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}

/// Writes the summary to `dst`, creating missing parent directories.
pub fn write_summary(summary: &SummaryDocument, dst: &Path) -> Result<(), CoverageError> {
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CoverageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = render_summary(summary)?;
    std::fs::write(dst, json).map_err(|source| CoverageError::Write {
        path: dst.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %dst.display(), files = summary.files.len(), "wrote coverage summary");
    Ok(())
}

/// Full conversion: load `src`, build the summary, write it to `dst`.
pub fn convert(src: &Path, dst: &Path) -> Result<SummaryDocument, CoverageError> {
    let doc = load_document(src)?;
    let summary = build_summary(&doc);
    write_summary(&summary, dst)?;
    Ok(summary)
}
