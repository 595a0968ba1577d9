use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use enczil_core::params::ENCRYPTED_SUFFIX;

use crate::constants::CONFIG_ENV;

/// User configuration. Every section is optional in the file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EnczilConfig {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub passphrase: PassphraseSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub suffix: String,
    pub overwrite: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            suffix: ENCRYPTED_SUFFIX.to_string(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseSection {
    /// Ask twice when encrypting interactively
    pub confirm: bool,
    /// Interactive decrypt attempts
    pub attempts: u32,
}

impl Default for PassphraseSection {
    fn default() -> Self {
        Self {
            confirm: true,
            attempts: 3,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub ascii: bool,
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: true,
        }
    }
}

impl EnczilConfig {
    /// Reject values the commands cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.output.suffix.is_empty() || self.output.suffix.contains(['/', '\\']) {
            return Err(anyhow::anyhow!(
                "Invalid output.suffix {:?}: must be non-empty and contain no path separators",
                self.output.suffix
            ));
        }
        if self.passphrase.attempts == 0 {
            return Err(anyhow::anyhow!("passphrase.attempts must be at least 1"));
        }
        Ok(())
    }
}

/// Resolve the config file path, checking ENCZIL_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config at `path`, or defaults if the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<EnczilConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(EnczilConfig::default());
    }
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<EnczilConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &EnczilConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("enczil"));
        }
    }
    Ok(home_dir()?.join(".config").join("enczil"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
