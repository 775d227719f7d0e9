//! Exit codes of the `gemeente-sanitize` binary.
//! Per-file failures do not change the exit code; they are reported on stdout and in the summary.

pub const SUCCESS: i32 = 0;
pub const CHECK_FAILED: i32 = 1; // --check found files that are not normalized
pub const FATAL: i32 = 2; // Root directory missing, summary unwritable, bad arguments
