//! Error types for the extractor and the coverage converter.

use std::path::PathBuf;

/// Errors raised while extracting a tool result payload.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Input file missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON.
    #[error("Invalid JSON file: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsed but has no string `result` field.
    #[error("Missing string field result")]
    Schema,

    /// Payload present but does not have the expected shape.
    #[error("{message}")]
    Validation { message: String },
}

impl ExtractError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Errors raised while converting a coverage export.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    /// Pre-flight check: the source file does not exist.
    #[error("Input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse coverage JSON {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize coverage summary: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl CoverageError {
    /// True for the pre-flight existence failure, which the CLI reports as a usage error.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}
