//! Error types for Enczil core operations.
//!
//! Every failure is classified where it is detected and returned to the
//! caller. The CLI layer maps these to exit codes and user-facing messages.

use std::io;

use thiserror::Error;

/// Result type alias for Enczil operations.
pub type Result<T> = std::result::Result<T, EnczilError>;

/// Core error type for Enczil operations.
#[derive(Debug, Error)]
pub enum EnczilError {
    /// Input rejected before any cryptographic work
    #[error("Validation error: {0}")]
    Validation(String),

    /// Encrypted input is not in the expected layout
    #[error("Format error: {0}")]
    Format(String),

    /// Tag verification failed.
    ///
    /// A wrong password and a modified file are indistinguishable here.
    #[error("Decryption failed: wrong password or the file is corrupted")]
    AuthenticationFailed,

    /// Padding inconsistent after a successful authentication
    #[error("Padding error: {0}")]
    Padding(String),

    /// Filesystem failure
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Cipher or random source failure
    #[error("Encryption error: {0}")]
    Crypto(String),
}

/// Coarse classification of an [`EnczilError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Format,
    Authentication,
    Padding,
    Io,
    Crypto,
}

impl EnczilError {
    /// Wrap an I/O error with the path or step it concerned.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        EnczilError::Io {
            context: context.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnczilError::Validation(_) => ErrorKind::Validation,
            EnczilError::Format(_) => ErrorKind::Format,
            EnczilError::AuthenticationFailed => ErrorKind::Authentication,
            EnczilError::Padding(_) => ErrorKind::Padding,
            EnczilError::Io { .. } => ErrorKind::Io,
            EnczilError::Crypto(_) => ErrorKind::Crypto,
        }
    }

    /// Whether this is an I/O error caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EnczilError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

impl From<io::Error> for EnczilError {
    fn from(err: io::Error) -> Self {
        EnczilError::io("I/O", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_message_does_not_pick_a_cause() {
        let message = EnczilError::AuthenticationFailed.to_string();
        assert!(message.contains("wrong password or the file is corrupted"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            EnczilError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(EnczilError::Format("x".into()).kind(), ErrorKind::Format);
        assert_eq!(
            EnczilError::AuthenticationFailed.kind(),
            ErrorKind::Authentication
        );
        assert_eq!(EnczilError::Padding("x".into()).kind(), ErrorKind::Padding);
        assert_eq!(EnczilError::Crypto("x".into()).kind(), ErrorKind::Crypto);
    }

    #[test]
    fn test_io_not_found() {
        let err = EnczilError::io(
            "reading /nope",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.is_not_found());
        assert!(err.to_string().contains("reading /nope"));

        let denied: EnczilError = io::Error::new(io::ErrorKind::PermissionDenied, "no").into();
        assert!(!denied.is_not_found());
    }
}
