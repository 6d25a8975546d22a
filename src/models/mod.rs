//! Data models for colors, shade levels and palettes.
//!
//! Models are independent of rendering and of the interactive session.

pub mod palette;
pub mod rgb;
pub mod shade;

// Re-export all model types
pub use palette::{ColorFamily, Palette, PaletteBuilder, BASE_LIGHTNESS};
pub use rgb::{is_hex_color, normalize_hex, Hsl, RgbColor};
pub use shade::ShadeLevel;
