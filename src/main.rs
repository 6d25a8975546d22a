//! Color Palette Generator - shade palettes from named base colors
//!
//! Without a subcommand the generator runs an interactive session on the
//! terminal. The `generate` and `config` subcommands provide the same
//! functionality for scripts.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettegen::app;
use palettegen::cli::{self, CliError, ConfigArgs, GenerateArgs};
use palettegen::config::Config;
use palettegen::constants::{APP_BINARY_NAME, APP_NAME};

/// Color Palette Generator - shade palettes from named base colors
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Use this config file instead of the user config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and export a palette without prompting
    Generate(GenerateArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so exports printed to stdout stay clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    let result = match &cli.command {
        Some(Command::Generate(args)) => {
            cli::common::load_config(config_path).and_then(|config| args.execute(&config))
        }
        Some(Command::Config(args)) => args.execute(config_path),
        None => {
            let config = cli::common::load_config(config_path).unwrap_or_else(|e| {
                warn!("{}; using defaults", e);
                Config::default()
            });
            println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
            return app::run_interactive_terminal(&config);
        }
    };

    if let Err(e) = result {
        exit_with(&e);
    }
    Ok(())
}

fn exit_with(error: &CliError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(error.exit_code.code());
}
