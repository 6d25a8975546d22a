//! Generate command: build a palette from arguments and export it.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{
    group_name_for, resolve_output_base, strip_known_suffix, write_export, ExportFormat,
};
use crate::models::{Palette, PaletteBuilder};
use clap::Args;

/// Generate a palette from named colors and export it
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Color to include, as NAME=HEX (repeatable, order is kept)
    #[arg(short, long = "color", value_name = "NAME=HEX", required = true, value_parser = parse_color_arg)]
    pub colors: Vec<(String, String)>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file name; relative names resolve against the output directory
    /// (defaults to palette_export_[date])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Group name for bundle exports (defaults to the configured group or the file name)
    #[arg(long, value_name = "NAME")]
    pub group: Option<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let palette = self.build_palette()?;
        let format = self.format.unwrap_or(config.export.default_format);

        let base_dir = config
            .output_base_dir()
            .map_err(|e| CliError::io(format!("Failed to resolve output directory: {e:#}")))?;
        let name = self.output_name();
        if strip_known_suffix(&name).trim().is_empty() {
            return Err(CliError::validation("Output file name cannot be empty"));
        }
        let base = resolve_output_base(&name, &base_dir);

        let group = self
            .group
            .clone()
            .or_else(|| config.export.group_name.clone())
            .unwrap_or_else(|| group_name_for(&base));
        if group.trim().is_empty() {
            return Err(CliError::validation("Group name cannot be empty"));
        }

        let path = write_export(&palette, format, &base, &group)
            .map_err(|e| CliError::io(format!("Failed to export palette: {e:#}")))?;

        println!("✓ Exported palette to: {}", path.display());
        Ok(())
    }

    fn build_palette(&self) -> CliResult<Palette> {
        let mut builder = PaletteBuilder::new();
        for (name, hex) in &self.colors {
            builder
                .add_color(name, hex)
                .map_err(|e| CliError::validation(format!("Color '{name}': {e}")))?;
        }
        Ok(builder.finalize())
    }

    /// Output file name, either user-specified or auto-generated
    fn output_name(&self) -> String {
        if let Some(name) = &self.output {
            return name.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        format!("palette_export_{}", date)
    }
}

/// Parses a `NAME=HEX` argument. The hex value itself is validated later.
fn parse_color_arg(arg: &str) -> Result<(String, String), String> {
    let (name, hex) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=HEX, got '{arg}'"))?;
    Ok((name.to_string(), hex.to_string()))
}
