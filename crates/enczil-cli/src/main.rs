//! Enczil CLI - password-based file encryption
//!
//! This is the command-line interface for Enczil. It acquires passphrases,
//! resolves paths and renders results; the cryptography lives in `enczil-core`.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};
use config::UiSection;
use errors::classify;
use ui::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx) {
        tracing::debug!(error = %format!("{:#}", err), "command failed");
        let fallback;
        let ui = match ctx.ui() {
            Ok(ui) => ui,
            Err(_) => {
                fallback = UiContext::new(&cli, &UiSection::default());
                &fallback
            }
        };
        classify(err).exit(ui);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "enczil_core={level},enczil_cli={level}"
                ))
            }),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Encrypt(args) => commands::handle_encrypt(ctx, args),
        Commands::Decrypt(args) => commands::handle_decrypt(ctx, args),
        Commands::Inspect(args) => commands::handle_inspect(ctx, args),
        Commands::Config(command) => commands::handle_config(ctx, command),
        Commands::Completions(args) => commands::handle_completions(args.shell),
    }
}
