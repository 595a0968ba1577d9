//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The derived key is a pure function of (password, salt, iteration count),
//! which is what lets decryption rebuild the key from the stored salt.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{EnczilError, Result};
use crate::params::{KdfParams, KEY_LEN, SALT_LEN};

/// Display name of the key derivation function.
pub const KDF_NAME: &str = "PBKDF2-HMAC-SHA256";

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a password and salt.
///
/// # Arguments
///
/// * `password` - The password to derive from (must be non-empty)
/// * `salt` - Random salt, exactly 16 bytes
/// * `params` - Iteration count; use [`KdfParams::default`] for real files
///
/// # Examples
///
/// ```
/// use enczil_core::crypto::derive_key;
/// use enczil_core::KdfParams;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt, KdfParams::new(1_000)).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8], params: KdfParams) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(EnczilError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }

    if salt.len() != SALT_LEN {
        return Err(EnczilError::Validation(format!(
            "Salt must be exactly {} bytes (got {})",
            SALT_LEN,
            salt.len()
        )));
    }

    params.validate()?;

    tracing::debug!(iterations = params.iterations(), "deriving key");

    let mut key_bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt,
        params.iterations(),
        &mut key_bytes,
    );

    Ok(DerivedKey::from_bytes(key_bytes))
}
