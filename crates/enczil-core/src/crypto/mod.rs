//! Cryptographic building blocks for Enczil.
//!
//! - **key**: PBKDF2-HMAC-SHA256 key derivation
//! - **passphrase**: Caller-level password checks
//! - **padding**: PKCS#7 block padding
//! - **aead**: The authenticated cipher seam and its AES-256-GCM implementation
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of an encrypted file
//! - Offline guessing of the password (slowed by the PBKDF2 cost)
//! - Modification of the encrypted file
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Weak passwords

pub mod aead;
pub mod key;
pub mod padding;
pub mod passphrase;

pub use aead::{AeadCipher, AesGcmCipher};
pub use key::{derive_key, DerivedKey, KDF_NAME};
pub use padding::{pad, unpad};
pub use passphrase::validate_passphrase;
