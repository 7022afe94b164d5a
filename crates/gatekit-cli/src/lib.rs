//! Shared plumbing for the Gatekit binaries.

pub mod args;
pub mod commands;
pub mod exit_codes;
pub mod logging;
