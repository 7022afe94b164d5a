//! Gatekit core: single-pass JSON transforms used by CI pipelines.
//!
//! - [`extract`] pulls the `result` string out of an agent tool response, optionally
//!   stripping one outer code fence and checking the payload shape.
//! - [`coverage`] rewrites an llvm-cov JSON export into the normalized
//!   `coverage-summary.json` layout.

pub mod coverage;
pub mod errors;
pub mod extract;

pub use errors::{CoverageError, ExtractError};
