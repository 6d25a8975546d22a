//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use palettegen::config::Config;
use palettegen::models::{Palette, PaletteBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the palettegen binary
pub fn palettegen_bin() -> String {
    std::env::var("CARGO_BIN_EXE_palettegen")
        .unwrap_or_else(|_| "target/debug/palettegen".to_string())
}

/// A temporary directory holding an isolated config file and an output directory.
///
/// Every command built from the workspace passes `--config`, so tests never
/// read or write the user's real configuration.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Creates a workspace whose config points exports at `out/`.
    pub fn new() -> Self {
        let workspace = Self::without_config();
        let mut config = Config::new();
        config.export.output_dir = Some(workspace.output_dir());
        config
            .save_to(&workspace.config_path())
            .expect("Failed to write test config");
        workspace
    }

    /// Creates a workspace with no config file yet (defaults apply).
    pub fn without_config() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("out")).expect("Failed to create output dir");
        Self { dir }
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Config file passed to every command.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Directory exports land in.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Builds a command running `palettegen --config <file> <args>`.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(palettegen_bin());
        cmd.arg("--config").arg(self.config_path());
        cmd.args(args);
        cmd
    }

    /// Runs `palettegen` with `args` and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }
}

/// Asserts the process exited with `code`, showing stderr on failure.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Two-color palette used across tests: a saturated blue and a gray.
pub fn sample_palette() -> Palette {
    let mut builder = PaletteBuilder::new();
    builder.add_color("brand", "#3366CC").unwrap();
    builder.add_color("ink", "#808080").unwrap();
    builder.finalize()
}
