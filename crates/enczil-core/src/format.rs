//! Encrypted-file framing.
//!
//! ```text
//! offset  len  field
//!      0   16  salt
//!     16   16  nonce
//!     32   16  tag
//!     48    *  ciphertext (multiple of 16)
//! ```
//!
//! All fields are opaque byte strings; there is no version byte.

use crate::error::{EnczilError, Result};
use crate::params::{BLOCK_LEN, HEADER_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};

/// A borrowed view over an encrypted file's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedFile<'a> {
    pub salt: &'a [u8; SALT_LEN],
    pub nonce: &'a [u8; NONCE_LEN],
    pub tag: &'a [u8; TAG_LEN],
    pub ciphertext: &'a [u8],
}

impl<'a> EncryptedFile<'a> {
    /// Split `data` into its fixed-offset fields.
    ///
    /// # Errors
    ///
    /// Returns `EnczilError::Format` if `data` is shorter than the 48-byte
    /// header or the ciphertext is not block-aligned.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(EnczilError::Format(format!(
                "Input is {} bytes; an encrypted file is at least {} bytes",
                data.len(),
                HEADER_LEN
            )));
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (nonce, rest) = rest.split_at(NONCE_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(EnczilError::Format(format!(
                "Ciphertext length {} is not a multiple of {}",
                ciphertext.len(),
                BLOCK_LEN
            )));
        }

        Ok(Self {
            salt: fixed(salt)?,
            nonce: fixed(nonce)?,
            tag: fixed(tag)?,
            ciphertext,
        })
    }

    /// Total encoded length.
    pub fn len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }

    /// Whether the ciphertext region is empty.
    ///
    /// A file written by this crate never has an empty ciphertext, since
    /// padding always adds at least one block.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Serialize to `salt ‖ nonce ‖ tag ‖ ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.salt);
        out.extend_from_slice(self.nonce);
        out.extend_from_slice(self.tag);
        out.extend_from_slice(self.ciphertext);
        out
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> Result<&[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| EnczilError::Format(format!("Expected a {}-byte field", N)))
}
