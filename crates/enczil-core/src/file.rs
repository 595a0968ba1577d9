//! File-level encryption and decryption.
//!
//! This is the boundary the CLI calls: explicit source and destination
//! paths in, a [`FileReport`] or a typed error out. The destination is only
//! written once the whole output has been computed, and the write itself is
//! atomic, so a failed operation never leaves a truncated file behind.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use rand::{CryptoRng, RngCore};
use serde::Serialize;

use crate::cipher::FileCipher;
use crate::crypto::{validate_passphrase, AeadCipher};
use crate::error::{EnczilError, Result};
use crate::fs::write_atomic;

/// Which direction an operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// Outcome of a successful file operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub operation: Operation,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl FileReport {
    /// Human-readable status line.
    pub fn message(&self) -> String {
        let verb = match self.operation {
            Operation::Encrypt => "Encrypted",
            Operation::Decrypt => "Decrypted",
        };
        format!(
            "{} {} -> {}",
            verb,
            self.source.display(),
            self.destination.display()
        )
    }
}

/// Encrypt the file at `source` into `destination`.
///
/// `destination` is replaced if it exists; refusing to overwrite is the
/// caller's decision.
pub fn encrypt_file<R, C>(
    cipher: &mut FileCipher<R, C>,
    source: &Path,
    destination: &Path,
    password: &str,
) -> Result<FileReport>
where
    R: RngCore + CryptoRng,
    C: AeadCipher,
{
    validate_passphrase(password)?;
    ensure_distinct(source, destination)?;

    let plaintext = read_source(source)?;
    let encrypted = cipher.encrypt(&plaintext, password)?;
    write_atomic(destination, &encrypted)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "file encrypted"
    );

    Ok(FileReport {
        operation: Operation::Encrypt,
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes_in: plaintext.len() as u64,
        bytes_out: encrypted.len() as u64,
    })
}

/// Decrypt the file at `source` into `destination`.
///
/// Nothing is written unless authentication and unpadding both succeed.
pub fn decrypt_file<R, C>(
    cipher: &FileCipher<R, C>,
    source: &Path,
    destination: &Path,
    password: &str,
) -> Result<FileReport>
where
    C: AeadCipher,
{
    validate_passphrase(password)?;
    ensure_distinct(source, destination)?;

    let encrypted = read_source(source)?;
    let plaintext = zeroize::Zeroizing::new(cipher.decrypt(&encrypted, password)?);
    write_atomic(destination, &plaintext)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "file decrypted"
    );

    Ok(FileReport {
        operation: Operation::Decrypt,
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes_in: encrypted.len() as u64,
        bytes_out: plaintext.len() as u64,
    })
}

/// Default destination for encrypting `source`: the path with `suffix`
/// appended (`report.pdf` -> `report.pdf.enc`).
pub fn encrypted_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    validate_suffix(suffix)?;
    let mut name = source
        .file_name()
        .ok_or_else(|| {
            EnczilError::Validation(format!("Not a file path: {}", source.display()))
        })?
        .to_os_string();
    name.push(suffix);
    Ok(source.with_file_name(name))
}

/// Default destination for decrypting `source`: the path with a trailing
/// `suffix` removed (`report.pdf.enc` -> `report.pdf`).
///
/// # Errors
///
/// Returns `EnczilError::Validation` if the file name does not end in
/// `suffix`, or consists only of it.
pub fn decrypted_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    validate_suffix(suffix)?;
    let name = source.file_name().ok_or_else(|| {
        EnczilError::Validation(format!("Not a file path: {}", source.display()))
    })?;

    match strip_name_suffix(name, suffix) {
        Some(stem) if !stem.is_empty() => Ok(source.with_file_name(stem)),
        _ => Err(EnczilError::Validation(format!(
            "{} does not look like an encrypted file (expected a {} suffix)",
            source.display(),
            suffix
        ))),
    }
}

#[cfg(unix)]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(|stem| OsStr::from_bytes(stem).to_os_string())
}

#[cfg(not(unix))]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    name.to_str()?.strip_suffix(suffix).map(OsString::from)
}

fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() || suffix.contains(['/', '\\']) {
        return Err(EnczilError::Validation(format!(
            "Invalid file suffix: {:?}",
            suffix
        )));
    }
    Ok(())
}

fn read_source(source: &Path) -> Result<Vec<u8>> {
    fs::read(source).map_err(|e| EnczilError::io(format!("reading {}", source.display()), e))
}

fn ensure_distinct(source: &Path, destination: &Path) -> Result<()> {
    let same = source == destination
        || match (source.canonicalize(), destination.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
    if same {
        return Err(EnczilError::Validation(format!(
            "Source and destination are the same file: {}",
            source.display()
        )));
    }
    Ok(())
}
