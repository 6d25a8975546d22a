//! Error types for palette input validation and export.
//!
//! Every variant here is recoverable: the interactive session surfaces the
//! message and re-prompts instead of aborting.

use std::path::PathBuf;

/// Errors raised by the color codec, the palette model and the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A hex string had the wrong length or a non-hex character.
    #[error("invalid hex color format '{0}': expected 3 or 6 hex digits")]
    InvalidFormat(String),

    /// A color was rejected when adding it to the palette.
    #[error("invalid hexadecimal color code '{0}'")]
    InvalidColor(String),

    /// A menu or format choice was out of range or not a number.
    #[error("invalid selection '{0}'")]
    InvalidSelection(String),

    /// A staged bundle document was absent when the archive was packaged.
    #[error("file {} does not exist and will be skipped", .0.display())]
    MissingFile(PathBuf),

    /// A color was given an empty name.
    #[error("color name cannot be empty")]
    EmptyName,

    /// An export was requested with an empty file name.
    #[error("file name cannot be empty")]
    EmptyFileName,
}

/// Result alias for palette operations.
pub type PaletteResult<T> = std::result::Result<T, PaletteError>;
