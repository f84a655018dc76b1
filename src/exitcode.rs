/// Standard Unix exit codes for the promptstash CLI.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, failed command, etc.
pub const USAGE: i32 = 64;
