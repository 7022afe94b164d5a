//! Process exit codes shared by the Gatekit binaries.
//! These codes are part of the CI contract; pipelines branch on them.

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // Input unreadable/invalid, validation failed, or I/O fault
pub const USAGE: i32 = 2; // Wrong arguments or missing coverage input
