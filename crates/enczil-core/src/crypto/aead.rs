//! Authenticated encryption seam.
//!
//! [`AeadCipher`] is the capability the encryptor and decryptor are handed.
//! The format fixes the suite to AES-256-GCM with a 16-byte nonce and a
//! detached 16-byte tag; [`AesGcmCipher`] is that suite.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;

use crate::crypto::key::DerivedKey;
use crate::error::{EnczilError, Result};
use crate::params::{NONCE_LEN, TAG_LEN};

/// AES-256-GCM parameterized with a 128-bit nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// An authenticated cipher operating in place with a detached tag.
pub trait AeadCipher {
    /// Human-readable suite name.
    fn name(&self) -> &'static str;

    /// Encrypt `buffer` in place and return the authentication tag.
    fn seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_LEN]>;

    /// Verify `tag` and decrypt `buffer` in place.
    ///
    /// Must return `EnczilError::AuthenticationFailed` on any tag mismatch
    /// and leave no usable plaintext behind.
    fn open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<()>;
}

/// AES-256-GCM with 16-byte nonces, no associated data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmCipher;

impl AesGcmCipher {
    fn cipher(key: &DerivedKey) -> Result<Aes256Gcm16> {
        Aes256Gcm16::new_from_slice(key.as_bytes())
            .map_err(|e| EnczilError::Crypto(format!("Failed to create cipher: {}", e)))
    }
}

impl AeadCipher for AesGcmCipher {
    fn name(&self) -> &'static str {
        "AES-256-GCM"
    }

    fn seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_LEN]> {
        let cipher = Self::cipher(key)?;
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(nonce), b"", buffer)
            .map_err(|_| EnczilError::Crypto("Encryption failed".to_string()))?;

        let mut out = [0u8; TAG_LEN];
        out.copy_from_slice(tag.as_slice());
        Ok(out)
    }

    fn open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<()> {
        let cipher = Self::cipher(key)?;
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(nonce),
                b"",
                buffer,
                GenericArray::from_slice(tag),
            )
            .map_err(|_| EnczilError::AuthenticationFailed)
    }
}
