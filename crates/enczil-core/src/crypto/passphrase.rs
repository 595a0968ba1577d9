//! Password validation.
//!
//! The only hard requirement is that a password is present. Strength is the
//! caller's business.

use crate::error::{EnczilError, Result};

/// Validate that a password can be used for an operation.
///
/// Returns `EnczilError::Validation` for an empty password. Whitespace is
/// accepted as-is; the password is never trimmed.
///
/// # Examples
///
/// ```
/// use enczil_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("correct horse").is_ok());
/// assert!(validate_passphrase("").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.is_empty() {
        return Err(EnczilError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passphrase() {
        assert!(validate_passphrase("pw").is_ok());
        assert!(validate_passphrase("longer passphrase with spaces and symbols!@#").is_ok());
        assert!(validate_passphrase("kata sandi rahasia").is_ok());
    }

    #[test]
    fn test_passphrase_empty() {
        let result = validate_passphrase("");
        assert!(matches!(result, Err(EnczilError::Validation(_))));
    }

    #[test]
    fn test_whitespace_is_a_password() {
        assert!(validate_passphrase(" ").is_ok());
    }
}
