//! Passphrase acquisition around the core file operations.

use std::io::IsTerminal;
use std::path::Path;

use enczil_core::{decrypt_file, encrypt_file, EnczilError, FileCipher, FileReport};

use super::AppContext;
use crate::helpers::{env_passphrase, prompt_new_passphrase, prompt_passphrase};
use crate::ui::{badge, run_with_spinner, Badge};

fn is_interactive(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal()
}

/// Encrypt `source` into `destination`, asking for a new passphrase.
pub fn encrypt_with_passphrase(
    ctx: &AppContext,
    source: &Path,
    destination: &Path,
    no_input: bool,
) -> anyhow::Result<FileReport> {
    let config = ctx.config()?;
    let ui = ctx.ui()?;
    let password = prompt_new_passphrase(is_interactive(no_input), config.passphrase.confirm)?;

    let report = run_with_spinner(ui, "Encrypting", ctx.quiet(), || {
        let mut cipher = FileCipher::new();
        encrypt_file(&mut cipher, source, destination, password.as_str())
    })?;
    Ok(report)
}

/// Decrypt `source` into `destination`.
///
/// A passphrase from ENCZIL_PASSPHRASE gets exactly one attempt. Interactive
/// sessions are re-prompted on authentication failure up to
/// `passphrase.attempts` times.
pub fn decrypt_with_retry(
    ctx: &AppContext,
    source: &Path,
    destination: &Path,
    no_input: bool,
) -> anyhow::Result<FileReport> {
    let config = ctx.config()?;
    let ui = ctx.ui()?;
    let interactive = is_interactive(no_input);
    let attempts = if env_passphrase().is_some() || !interactive {
        1
    } else {
        config.passphrase.attempts.max(1)
    };

    let cipher = FileCipher::new();
    let mut remaining = attempts;
    loop {
        let password = prompt_passphrase(interactive)?;
        let result = run_with_spinner(ui, "Decrypting", ctx.quiet(), || {
            decrypt_file(&cipher, source, destination, password.as_str())
        });
        remaining -= 1;

        match result {
            Err(EnczilError::AuthenticationFailed) if remaining > 0 => {
                tracing::debug!(remaining, "authentication failed, prompting again");
                let message = format!(
                    "Decryption failed. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
                eprintln!("{}", badge(ui, Badge::Warn, &message));
            }
            other => return Ok(other?),
        }
    }
}
