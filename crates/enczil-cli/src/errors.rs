//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use enczil_core::{EnczilError, ErrorKind};

use crate::constants::exit_codes;
use crate::ui::{badge, Badge, UiContext};

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (source file, config)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password or modified file)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Input is not a well-formed encrypted file
    Integrity(String),

    /// Anything else (I/O, cipher failures)
    Failed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } | CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::Integrity(message) | CliError::Failed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Integrity(_) => exit_codes::INTEGRITY_FAILED,
            CliError::Failed(_) => exit_codes::GENERAL,
        }
    }

    /// Short machine-readable label for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::NotFound { .. } => "not_found",
            CliError::AuthFailed { .. } => "auth_failed",
            CliError::InvalidInput { .. } => "invalid_input",
            CliError::Integrity(_) => "integrity",
            CliError::Failed(_) => "failed",
        }
    }

    /// Print the error and exit with the appropriate code.
    ///
    /// In JSON mode a `{"status":"error",...}` object goes to stdout as well,
    /// so scripts always get a parseable result.
    pub fn exit(&self, ui: &UiContext) -> ! {
        if ui.mode.is_json() {
            let value = serde_json::json!({
                "status": "error",
                "kind": self.kind(),
                "message": self.to_string(),
            });
            println!("{}", value);
        }
        eprintln!("{}", badge(ui, Badge::Err, &format!("Error: {}", self)));
        std::process::exit(self.exit_code())
    }
}

impl From<EnczilError> for CliError {
    fn from(err: EnczilError) -> Self {
        if err.is_not_found() {
            return CliError::not_found(err.to_string(), "Hint: Check the path and try again.");
        }
        match err.kind() {
            ErrorKind::Validation => CliError::invalid_input(err.to_string()),
            ErrorKind::Authentication => CliError::auth_failed_with_hint(
                "Decryption failed.",
                "Hint: Either the password is wrong or the file was modified; there is no way to tell which.",
            ),
            ErrorKind::Format | ErrorKind::Padding => CliError::Integrity(format!(
                "Not a valid encrypted file: {}",
                err
            )),
            ErrorKind::Io | ErrorKind::Crypto => CliError::Failed(err.to_string()),
        }
    }
}

/// Classify an arbitrary handler error for exit.
pub fn classify(err: anyhow::Error) -> CliError {
    match err.downcast::<CliError>() {
        Ok(cli_err) => cli_err,
        Err(err) => match err.downcast::<EnczilError>() {
            Ok(core_err) => CliError::from(core_err),
            Err(other) => CliError::Failed(format!("{:#}", other)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_maps_to_auth_exit_code() {
        let err = CliError::from(EnczilError::AuthenticationFailed);
        assert_eq!(err.exit_code(), exit_codes::AUTH_FAILED);
        assert!(err.to_string().contains("no way to tell which"));
    }

    #[test]
    fn test_format_and_padding_map_to_integrity() {
        let format = CliError::from(EnczilError::Format("short".into()));
        let padding = CliError::from(EnczilError::Padding("bad".into()));
        assert_eq!(format.exit_code(), exit_codes::INTEGRITY_FAILED);
        assert_eq!(padding.exit_code(), exit_codes::INTEGRITY_FAILED);
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::from(EnczilError::io("reading x", io));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_classify_unwraps_core_errors() {
        let err = anyhow::Error::new(EnczilError::Validation("Password cannot be empty".into()));
        let classified = classify(err);
        assert_eq!(classified.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(classified.kind(), "invalid_input");
    }

    #[test]
    fn test_classify_keeps_cli_errors() {
        let err = anyhow::Error::new(CliError::not_found("No such file", "Check the path."));
        assert_eq!(classify(err).exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_classify_falls_back_to_general() {
        let classified = classify(anyhow::anyhow!("boom"));
        assert_eq!(classified.exit_code(), exit_codes::GENERAL);
    }
}
