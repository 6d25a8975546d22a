//! Color Palette Generator Library
//!
//! This library turns each named base color into a family of the color
//! itself, a mid-lightness base and eleven shades, and exports palettes as
//! text tables, CSV, SVG swatch sheets, or zipped design token bundles.
//!
//! ```
//! use palettegen::models::{PaletteBuilder, ShadeLevel};
//!
//! let mut builder = PaletteBuilder::new();
//! builder.add_color("brand", "#3366CC").unwrap();
//! let palette = builder.finalize();
//!
//! let brand = palette.get("brand").unwrap();
//! assert_eq!(brand.main, "#3366CC");
//! assert_eq!(brand.base.to_hex(), "#3265cc");
//! assert_eq!(brand.shades().count(), 11);
//! assert_eq!(ShadeLevel::COUNT, 11);
//! ```

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
