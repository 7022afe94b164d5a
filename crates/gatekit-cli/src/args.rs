//! Command-line arguments for both binaries.

use clap::{Parser, ValueEnum};
use gatekit_core::extract::{ExtractOptions, Expectation};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpectArg {
    #[default]
    Any,
    Diff,
    Json,
}

impl From<ExpectArg> for Expectation {
    fn from(value: ExpectArg) -> Self {
        match value {
            ExpectArg::Any => Expectation::Any,
            ExpectArg::Diff => Expectation::Diff,
            ExpectArg::Json => Expectation::Json,
        }
    }
}

/// Extract .result from agent JSON output
#[derive(Parser, Debug, Clone)]
#[command(name = "extract-result", version)]
pub struct ExtractArgs {
    /// Path to the agent output JSON file
    pub input: PathBuf,

    /// Optional output validation
    #[arg(long, value_enum, default_value = "any", env = "GATEKIT_EXPECT")]
    pub expect: ExpectArg,

    /// Strip one outer markdown code fence if present
    #[arg(long, env = "GATEKIT_STRIP_FENCES")]
    pub strip_fences: bool,
}

impl ExtractArgs {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            expect: self.expect.into(),
            strip_fences: self.strip_fences,
        }
    }
}

/// Convert cargo llvm-cov JSON output to coverage-summary.json format
#[derive(Parser, Debug, Clone)]
#[command(name = "coverage-summary", version)]
pub struct CoverageArgs {
    /// llvm-cov JSON export to read
    #[arg(value_name = "llvm-cov.json")]
    pub src: PathBuf,

    /// Summary file to write (parent directories are created)
    #[arg(value_name = "coverage-summary.json")]
    pub dst: PathBuf,
}
