//! Password-based encryption and decryption of in-memory buffers.
//!
//! [`FileCipher`] bundles the three capabilities an operation needs: a
//! cryptographically secure random source for salts and nonces, an
//! authenticated cipher, and the key derivation cost. Production code uses
//! [`FileCipher::new`] (OS randomness, AES-256-GCM, default cost); tests
//! substitute a seeded RNG or a cheaper cost.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::{derive_key, pad, unpad, validate_passphrase, AeadCipher, AesGcmCipher};
use crate::error::{EnczilError, Result};
use crate::format::EncryptedFile;
use crate::params::{KdfParams, NONCE_LEN, SALT_LEN};

/// Encryptor/decryptor for the Enczil file format.
///
/// Holds no key material between calls. Each `encrypt` draws a fresh salt
/// and nonce and derives a fresh key that is zeroized when the call returns.
#[derive(Debug, Clone)]
pub struct FileCipher<R = OsRng, C = AesGcmCipher> {
    rng: R,
    aead: C,
    params: KdfParams,
}

impl FileCipher {
    /// OS randomness, AES-256-GCM, and the default PBKDF2 cost.
    pub fn new() -> Self {
        Self::with_params(KdfParams::default())
    }

    /// OS randomness and AES-256-GCM with a custom PBKDF2 cost.
    pub fn with_params(params: KdfParams) -> Self {
        Self::from_parts(OsRng, AesGcmCipher, params)
    }
}

impl Default for FileCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> FileCipher<R, C> {
    /// Assemble a cipher from explicit capabilities.
    pub fn from_parts(rng: R, aead: C, params: KdfParams) -> Self {
        Self { rng, aead, params }
    }

    pub fn params(&self) -> KdfParams {
        self.params
    }
}

impl<R, C> FileCipher<R, C>
where
    R: RngCore + CryptoRng,
    C: AeadCipher,
{
    /// Encrypt `plaintext` under `password`.
    ///
    /// Returns `salt ‖ nonce ‖ tag ‖ ciphertext`. The output is always at
    /// least 64 bytes: the 48-byte header plus one padding block.
    ///
    /// # Errors
    ///
    /// - `EnczilError::Validation` for an empty password
    /// - `EnczilError::Crypto` if the random source or cipher fails
    pub fn encrypt(&mut self, plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
        validate_passphrase(password)?;

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        self.fill(&mut salt)?;
        self.fill(&mut nonce)?;

        let key = derive_key(password, &salt, self.params)?;

        let mut buffer = Zeroizing::new(pad(plaintext));
        let tag = self.aead.seal(&key, &nonce, &mut buffer)?;

        tracing::debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = buffer.len(),
            suite = self.aead.name(),
            "encrypted buffer"
        );

        Ok(EncryptedFile {
            salt: &salt,
            nonce: &nonce,
            tag: &tag,
            ciphertext: buffer.as_slice(),
        }
        .to_bytes())
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| EnczilError::Crypto(format!("Random source failed: {}", e)))
    }
}

impl<R, C> FileCipher<R, C>
where
    C: AeadCipher,
{
    /// Decrypt data produced by [`FileCipher::encrypt`].
    ///
    /// # Errors
    ///
    /// - `EnczilError::Validation` for an empty password
    /// - `EnczilError::Format` if `data` is shorter than the header or
    ///   misaligned
    /// - `EnczilError::AuthenticationFailed` for a wrong password or a
    ///   modified file; the two cannot be told apart
    /// - `EnczilError::Padding` if the authenticated plaintext is not
    ///   validly padded
    pub fn decrypt(&self, data: &[u8], password: &str) -> Result<Vec<u8>> {
        validate_passphrase(password)?;

        let file = EncryptedFile::parse(data)?;
        let key = derive_key(password, file.salt, self.params)?;

        let mut buffer = Zeroizing::new(file.ciphertext.to_vec());
        self.aead.open(&key, file.nonce, &mut buffer, file.tag)?;

        let plaintext = unpad(&buffer)?.to_vec();

        tracing::debug!(
            ciphertext_len = file.ciphertext.len(),
            plaintext_len = plaintext.len(),
            suite = self.aead.name(),
            "decrypted buffer"
        );

        Ok(plaintext)
    }
}

/// Encrypt `data` with OS randomness and the default cost.
///
/// # Examples
///
/// ```no_run
/// use enczil_core::encrypt;
///
/// let encrypted = encrypt(b"secret data", "my-password").unwrap();
/// assert_eq!(encrypted.len(), 64);
/// ```
pub fn encrypt(data: &[u8], password: &str) -> Result<Vec<u8>> {
    FileCipher::new().encrypt(data, password)
}

/// Decrypt `data` written by [`encrypt`].
///
/// # Examples
///
/// ```no_run
/// use enczil_core::{decrypt, encrypt};
///
/// let encrypted = encrypt(b"secret data", "my-password").unwrap();
/// let decrypted = decrypt(&encrypted, "my-password").unwrap();
/// assert_eq!(decrypted, b"secret data");
/// ```
pub fn decrypt(data: &[u8], password: &str) -> Result<Vec<u8>> {
    FileCipher::new().decrypt(data, password)
}
