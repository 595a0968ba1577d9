//! # Enczil Core
//!
//! Core library for Enczil - password-based authenticated file encryption.
//!
//! This crate turns a password and a file's bytes into a self-describing
//! encrypted blob and back again. It performs no user interaction; the CLI
//! (or any other caller) supplies paths and passwords and renders the result.
//!
//! ## Architecture
//!
//! - **params**: Fixed sizes and the PBKDF2 cost parameter
//! - **crypto**: Key derivation, padding, and the AEAD cipher suite
//! - **format**: The `salt ‖ nonce ‖ tag ‖ ciphertext` framing
//! - **cipher**: Encryptor/decryptor over in-memory bytes
//! - **file**: File-level operations with atomic output
//! - **fs**: Atomic write and rename helpers
//!
//! ## Example
//!
//! ```
//! use enczil_core::{FileCipher, KdfParams};
//!
//! let mut cipher = FileCipher::with_params(KdfParams::new(1_000));
//! let sealed = cipher.encrypt(b"attack at dawn", "hunter2").unwrap();
//! let opened = cipher.decrypt(&sealed, "hunter2").unwrap();
//! assert_eq!(opened, b"attack at dawn");
//! ```

pub mod cipher;
pub mod crypto;
pub mod error;
pub mod file;
pub mod format;
pub mod fs;
pub mod params;

pub use cipher::{decrypt, encrypt, FileCipher};
pub use error::{EnczilError, ErrorKind, Result};
pub use file::{decrypt_file, decrypted_path, encrypt_file, encrypted_path, FileReport, Operation};
pub use format::EncryptedFile;
pub use params::KdfParams;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
