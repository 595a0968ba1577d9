use crate::app::AppContext;
use crate::cli::ConfigCommand;
use crate::config::{read_config, write_config, EnczilConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, Badge};

pub fn handle_config(ctx: &AppContext, command: &ConfigCommand) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    match command {
        ConfigCommand::Path => {
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let config = ctx.config()?;
            if ctx.ui()?.mode.is_json() {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::invalid_input_with_hint(
                    format!("Config file already exists: {}", path.display()),
                    "Hint: Pass --force to replace it.",
                )
                .into());
            }
            write_config(path, &EnczilConfig::default())?;
            // Read it back so a broken write surfaces here rather than on next use.
            read_config(path)?;

            let ui = ctx.ui()?;
            if !ctx.quiet() {
                println!(
                    "{}",
                    badge(ui, Badge::Ok, &format!("Wrote {}", path.display()))
                );
                println!("{}", hint(ui, "Edit the file to change the output suffix or prompts."));
            }
        }
    }
    Ok(())
}
