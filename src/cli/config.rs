//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory relative output names resolve against
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default export format for `generate`
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Default bundle group name for `generate`
    #[arg(long, value_name = "NAME")]
    group: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
    default_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand against `config_path`, or the user config file
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let file = config_file(config_path)?;

        if self.json {
            output_json(&config, &file)?;
        } else {
            output_human_readable(&config, &file);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.output_dir.is_none() && self.format.is_none() && self.group.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --output-dir, --format, or --group",
            ));
        }

        let mut config = load_config(config_path)?;

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            // Relative paths resolve against the current directory once, here
            let absolute = std::path::absolute(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to resolve output directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.export.output_dir = Some(absolute);
        }

        if let Some(format) = self.format {
            config.export.default_format = format;
        }

        if let Some(group) = &self.group {
            if group.trim().is_empty() {
                return Err(CliError::validation("Group name cannot be empty"));
            }
            config.export.group_name = Some(group.clone());
        }

        let file = config_file(config_path)?;
        config
            .save_to(&file)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn config_file(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}"))),
    }
}

fn output_dir_label(config: &Config) -> String {
    match &config.export.output_dir {
        Some(dir) => dir.display().to_string(),
        None => "(program directory)".to_string(),
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, file: &Path) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: file.to_string_lossy().to_string(),
        export: ExportOutput {
            output_dir: output_dir_label(config),
            default_format: config.export.default_format.to_string(),
            group_name: config.export.group_name.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, file: &Path) {
    println!("Palette Generator Configuration");
    println!("===============================");
    println!();
    println!("Config file: {}", file.display());
    println!();

    println!("Export:");
    println!("  Output Directory: {}", output_dir_label(config));
    println!("  Default Format: {}", config.export.default_format);
    match &config.export.group_name {
        Some(group) => println!("  Group Name: {group}"),
        None => println!("  Group Name: (file name)"),
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set_args(format: Option<ExportFormat>, group: Option<&str>) -> ConfigSetArgs {
        ConfigSetArgs {
            output_dir: None,
            format,
            group: group.map(str::to_string),
        }
    }

    #[test]
    fn test_set_requires_an_option() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let err = set_args(None, None).execute(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code.code(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_set_writes_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        set_args(Some(ExportFormat::Csv), Some("brand"))
            .execute(Some(&path))
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export.default_format, ExportFormat::Csv);
        assert_eq!(config.export.group_name.as_deref(), Some("brand"));
    }

    #[test]
    fn test_set_rejects_blank_group() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let err = set_args(None, Some(" ")).execute(Some(&path)).unwrap_err();
        assert_eq!(err.message, "Group name cannot be empty");
    }

    #[test]
    fn test_output_dir_label() {
        let mut config = Config::new();
        assert_eq!(output_dir_label(&config), "(program directory)");
        config.export.output_dir = Some(PathBuf::from("/srv/palettes"));
        assert_eq!(output_dir_label(&config), "/srv/palettes");
    }
}
