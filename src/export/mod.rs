//! Export functionality for palettes.
//!
//! This module renders a finalized [`Palette`] as a text table, CSV, an SVG
//! swatch sheet or a zip of design-tool variable bundles, and writes the
//! result to disk.

pub mod archive;
pub mod bundle;
pub mod csv;
pub mod output;
pub mod svg;
pub mod text_table;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PaletteError, PaletteResult};
use crate::models::Palette;

pub use archive::{write_bundle_archive, ArchiveReport};
pub use bundle::{bundle_document, render_bundle};
pub use csv::{csv_rows, render_csv};
pub use output::{group_name_for, program_dir, resolve_output_base, strip_known_suffix};
pub use svg::{render_svg, SvgLayout};
pub use text_table::render_text_table;

/// Output formats, in menu order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Fixed-width text table (`.txt`)
    #[default]
    Text,
    /// Comma-separated values (`.csv`)
    Csv,
    /// Scalable vector graphic swatch sheet (`.svg`)
    Svg,
    /// Zip of design-tool variable bundles (`.zip`)
    Bundle,
}

impl ExportFormat {
    /// All formats in menu order (selection 1 to 4).
    pub const ALL: [Self; 4] = [Self::Text, Self::Csv, Self::Svg, Self::Bundle];

    /// Parses a menu selection ("1" to "4").
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelection` for anything that is not a number in range.
    pub fn from_selection(input: &str) -> PaletteResult<Self> {
        let invalid = || PaletteError::InvalidSelection(input.to_string());
        let index: usize = input.trim().parse().map_err(|_| invalid())?;
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
            .ok_or_else(invalid)
    }

    /// File extension written for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Svg => "svg",
            Self::Bundle => "zip",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text File",
            Self::Csv => "Comma-Separated Values (CSV)",
            Self::Svg => "Scalable Vector Graphic (SVG)",
            Self::Bundle => "Design Tool Variables",
        }
    }

    /// The numbered menu shown when choosing a format.
    #[must_use]
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(i, format)| format!("{}) {}", i + 1, format.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Svg => "svg",
            Self::Bundle => "bundle",
        };
        f.write_str(name)
    }
}

/// Renders `palette` in `format` and writes it next to `base`.
///
/// `base` is the output path without extension. Bundle exports use `group`
/// as the collection name inside every document. Returns the written path.
pub fn write_export(
    palette: &Palette,
    format: ExportFormat,
    base: &Path,
    group: &str,
) -> Result<PathBuf> {
    let content = match format {
        ExportFormat::Text => render_text_table(palette),
        ExportFormat::Csv => render_csv(palette),
        ExportFormat::Svg => render_svg(palette),
        ExportFormat::Bundle => return write_bundle_archive(palette, base, group).map(|r| r.archive),
    };

    let path = output::with_appended_extension(base, format.extension());
    fs::write(&path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    info!(path = %path.display(), %format, colors = palette.len(), "wrote export");
    Ok(path)
}
