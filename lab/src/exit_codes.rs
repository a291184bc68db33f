//! Stable exit codes for the `lab` binary.

/// The menu stopped normally (exit token or end of input).
pub const OK: i32 = 0;
/// Start-up failed (bad config) or the console stream broke.
pub const INVALID: i32 = 1;
