//! CLI command handlers for the palette generator.
//!
//! This module provides headless, scriptable access to palette generation
//! for automation and tests. Running the binary without a subcommand starts
//! the interactive session instead.

pub mod common;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
