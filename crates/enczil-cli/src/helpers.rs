//! Passphrase input helpers for the CLI.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

/// Read the passphrase from ENCZIL_PASSPHRASE, if set and non-blank.
pub fn env_passphrase() -> Option<Zeroizing<String>> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(Zeroizing::new)
}

/// Prompt for an existing passphrase, or read it from ENCZIL_PASSPHRASE.
pub fn prompt_passphrase(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(no_passphrase_error().into());
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new passphrase (optionally confirmed), or read it from ENCZIL_PASSPHRASE.
pub fn prompt_new_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(no_passphrase_error().into());
    }
    let mut prompt = Password::new().with_prompt("Enter password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

fn no_passphrase_error() -> CliError {
    CliError::invalid_input_with_hint(
        "No password provided and no TTY available.",
        format!("Hint: Set {} or run in a terminal.", PASSPHRASE_ENV),
    )
}
