//! CLI binary entry point for map-config-cli

#[cfg(feature = "cli")]
use anyhow::Context;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use map_config_sdk::cli::commands::inspect::{handle_keys, handle_usage};
#[cfg(feature = "cli")]
use map_config_sdk::cli::commands::translations::{
    SyncArgs, handle_coverage, handle_prune, handle_sync,
};
#[cfg(feature = "cli")]
use map_config_sdk::cli::commands::validate::handle_validate;
#[cfg(feature = "cli")]
use map_config_sdk::config::EngineConfig;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "map-config-cli")]
#[command(about = "Validate and maintain map configuration documents")]
#[command(version)]
struct Cli {
    /// Directory containing .map-config.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Validate a document and print the report
    Validate {
        /// Input file ('-' for stdin)
        input: String,
    },
    /// Add missing translation keys to every language
    Sync {
        /// Input file ('-' for stdin)
        input: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Drop unused keys after syncing
        #[arg(long)]
        prune: bool,
    },
    /// Drop translation keys that are no longer used
    Prune {
        /// Input file ('-' for stdin)
        input: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the features that reference a layer
    Usage {
        /// Input file ('-' for stdin)
        input: String,
        /// Layer id to look up
        layer_id: String,
    },
    /// List the translation keys in use
    Keys {
        /// Input file ('-' for stdin)
        input: String,
    },
    /// Report missing translations per language
    Coverage {
        /// Input file ('-' for stdin)
        input: String,
    },
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = EngineConfig::load(&cli.config_dir)
        .with_context(|| format!("loading configuration from {}", cli.config_dir.display()))?;

    match cli.command {
        Commands::Validate { input } => handle_validate(&input, &config)?,
        Commands::Sync {
            input,
            output,
            prune,
        } => {
            let args = SyncArgs {
                input,
                output,
                prune,
            };
            handle_sync(&args, &config)?
        }
        Commands::Prune { input, output } => handle_prune(&input, output, &config)?,
        Commands::Usage { input, layer_id } => handle_usage(&input, &layer_id, &config)?,
        Commands::Keys { input } => handle_keys(&input, &config)?,
        Commands::Coverage { input } => handle_coverage(&input, &config)?,
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
