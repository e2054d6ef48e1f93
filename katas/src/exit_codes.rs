//! Stable exit codes for `katas` CLI commands.

/// Command succeeded with a positive answer.
pub const OK: i32 = 0;
/// Invalid input, configuration, or other errors.
pub const INVALID: i32 = 1;
/// The exercise answered negatively: `false`, no common directory, no value,
/// or no winner.
pub const NEGATIVE: i32 = 2;
