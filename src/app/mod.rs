//! Application orchestration layer
//!
//! This module connects the session state machine to a terminal (or any
//! reader/writer pair) without containing palette logic itself.

/// Prompt loop for the interactive palette session
pub mod interactive;

pub use interactive::run_session;

use anyhow::Result;
use std::io;

use crate::config::Config;

/// Runs the interactive session on stdin/stdout.
pub fn run_interactive_terminal(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, config)
}
