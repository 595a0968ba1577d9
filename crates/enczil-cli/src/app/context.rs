//! Application context for the Enczil CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded configuration and the UI context derived from both.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, EnczilConfig};
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<EnczilConfig>,
    ui: OnceCell<UiContext>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: OnceCell::new(),
            config: OnceCell::new(),
            ui: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolved config file path (which may not exist).
    pub fn config_path(&self) -> anyhow::Result<&PathBuf> {
        self.config_path.get_or_try_init(resolve_config_path)
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&EnczilConfig> {
        self.config
            .get_or_try_init(|| load_config(self.config_path()?))
    }

    /// Get the UI context; config `[ui]` settings combine with the flags.
    pub fn ui(&self) -> anyhow::Result<&UiContext> {
        self.ui
            .get_or_try_init(|| Ok(UiContext::new(self.cli, &self.config()?.ui)))
    }
}
