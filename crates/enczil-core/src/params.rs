//! Fixed parameters of the encrypted-file format.
//!
//! The file carries no version byte, so every value here is part of the
//! format. Changing any of them makes files written with the old values
//! unreadable.

use crate::error::{EnczilError, Result};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// GCM nonce length in bytes. 16 rather than the usual 12.
pub const NONCE_LEN: usize = 16;

/// GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// AES block length in bytes; padding aligns plaintext to this.
pub const BLOCK_LEN: usize = 16;

/// Size of the fixed header: salt, nonce, tag.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// PBKDF2-HMAC-SHA256 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 390_000;

/// Suffix appended to encrypted files by default.
pub const ENCRYPTED_SUFFIX: &str = ".enc";

/// Key derivation cost parameters.
///
/// Production code should use [`KdfParams::default`]; lower counts exist for
/// tests and produce files other installs cannot open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    iterations: u32,
}

impl KdfParams {
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Reject parameters PBKDF2 cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(EnczilError::Validation(
                "KDF iteration count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(PBKDF2_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_len() {
        assert_eq!(HEADER_LEN, 48);
    }

    #[test]
    fn test_default_iterations() {
        assert_eq!(KdfParams::default().iterations(), 390_000);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(KdfParams::new(0).validate().is_err());
        assert!(KdfParams::new(1).validate().is_ok());
    }
}
