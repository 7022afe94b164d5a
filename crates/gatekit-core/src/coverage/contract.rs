//! Fixed mapping between the llvm-cov JSON export and the `coverage-summary.json` consumer.
//!
//! None of this is configurable: the summary format is consumed by tooling that expects
//! exactly these keys and path roots.

/// Only files with this suffix are summarised.
pub const SOURCE_EXTENSION: &str = ".rs";

/// Path segment that marks the start of the canonical path.
pub const BACKEND_MARKER: &str = "/backend/";

/// Root of a canonical path.
pub const BACKEND_ROOT: &str = "backend/";

/// Coverage dimensions carried into the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    Lines,
    Functions,
    Branches,
    /// llvm-cov reports regions; the summary calls them statements
    /// (see `FileMetrics::statements`).
    Statements,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Lines,
        MetricKind::Functions,
        MetricKind::Branches,
        MetricKind::Statements,
    ];

    /// Key in an llvm-cov `summary`/`totals` object.
    pub const fn source_key(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Functions => "functions",
            Self::Branches => "branches",
            Self::Statements => "regions",
        }
    }
}
