//! `enczil inspect`: header facts without a password.

use std::path::PathBuf;

use enczil_core::crypto::{AeadCipher, AesGcmCipher, KDF_NAME};
use enczil_core::params::BLOCK_LEN;
use enczil_core::{EnczilError, EncryptedFile, FileCipher};

use crate::app::{resolve_source, AppContext};
use crate::cli::InspectArgs;
use crate::output::{header_json, print_header};

/// What can be learned about an encrypted file without decrypting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSummary {
    pub path: PathBuf,
    pub file_size: u64,
    pub salt: String,
    pub nonce: String,
    pub tag: String,
    pub ciphertext_len: usize,
    pub plaintext_min: usize,
    pub plaintext_max: usize,
    pub cipher: &'static str,
    pub kdf: &'static str,
    pub iterations: u32,
}

impl HeaderSummary {
    /// Summarize `file` as the default cipher would read it.
    pub fn from_file(path: PathBuf, file: &EncryptedFile<'_>) -> Self {
        let cipher = FileCipher::new();
        let ciphertext_len = file.ciphertext.len();
        // Padding adds between 1 and BLOCK_LEN bytes.
        let plaintext_max = ciphertext_len.saturating_sub(1);
        let plaintext_min = ciphertext_len.saturating_sub(BLOCK_LEN);
        Self {
            path,
            file_size: file.len() as u64,
            salt: hex::encode(file.salt),
            nonce: hex::encode(file.nonce),
            tag: hex::encode(file.tag),
            ciphertext_len,
            plaintext_min,
            plaintext_max,
            cipher: AesGcmCipher.name(),
            kdf: KDF_NAME,
            iterations: cipher.params().iterations(),
        }
    }
}

pub fn handle_inspect(ctx: &AppContext, args: &InspectArgs) -> anyhow::Result<()> {
    let source = resolve_source(&args.file)?;
    let data = std::fs::read(&source)
        .map_err(|e| EnczilError::io(format!("reading {}", source.display()), e))?;
    let file = EncryptedFile::parse(&data)?;
    if file.is_empty() {
        return Err(EnczilError::Format("Ciphertext is empty".to_string()).into());
    }

    let summary = HeaderSummary::from_file(source, &file);
    let ui = ctx.ui()?;
    if ui.mode.is_json() {
        println!("{}", header_json(&summary));
    } else {
        print_header(ui, &summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_plaintext_range() {
        let mut data = vec![0xAB; 48];
        data.extend_from_slice(&[0u8; 32]);
        let file = EncryptedFile::parse(&data).unwrap();
        let summary = HeaderSummary::from_file(PathBuf::from("x.enc"), &file);

        assert_eq!(summary.file_size, 80);
        assert_eq!(summary.ciphertext_len, 32);
        assert_eq!(summary.plaintext_min, 16);
        assert_eq!(summary.plaintext_max, 31);
        assert_eq!(summary.salt, "ab".repeat(16));
        assert_eq!(summary.cipher, "AES-256-GCM");
        assert_eq!(summary.kdf, "PBKDF2-HMAC-SHA256");
        assert_eq!(summary.iterations, 390_000);
    }
}
