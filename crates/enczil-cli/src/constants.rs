//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (I/O failures and anything unclassified)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure.
    pub const GENERAL: i32 = 1;

    /// Source file or config not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or modified file).
    pub const AUTH_FAILED: i32 = 5;

    /// Input is not a well-formed encrypted file.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "ENCZIL_PASSPHRASE";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ENCZIL_CONFIG";
