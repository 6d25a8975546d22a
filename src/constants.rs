//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the directory used for configuration.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Color Palette Generator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "palettegen";

/// Name of the per-user configuration directory.
pub const CONFIG_DIR_NAME: &str = "PaletteGenerator";
