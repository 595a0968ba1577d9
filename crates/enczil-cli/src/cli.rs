use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use enczil_core::VERSION;

/// Enczil - password-based file encryption (PBKDF2 + AES-256-GCM)
#[derive(Parser)]
#[command(name = "enczil")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format when not using --json
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Text output style requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// key=value lines, stable for scripts
    Plain,
    /// Badges and colors (falls back to plain off a terminal)
    Pretty,
}

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args)]
pub struct TransformArgs {
    /// File to process
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Output path (defaults to adding or removing the configured suffix)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Encrypted file to inspect
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path in use
    Path,

    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file with a password
    Encrypt(TransformArgs),

    /// Decrypt a file produced by `enczil encrypt`
    Decrypt(TransformArgs),

    /// Show the header of an encrypted file (no password needed)
    Inspect(InspectArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
