//! Palette data structures: named base colors and their derived families.
//!
//! Colors are collected into a [`PaletteBuilder`]. Calling
//! [`PaletteBuilder::finalize`] derives the base color and every shade once and
//! returns a read-only [`Palette`], which is what the exporters consume.

use tracing::debug;

use super::rgb::{is_hex_color, RgbColor};
use super::shade::ShadeLevel;
use crate::error::{PaletteError, PaletteResult};

/// Lightness used for the base (midpoint) color of each family.
pub const BASE_LIGHTNESS: f64 = 0.5;

/// A named color waiting for its shades to be derived.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingColor {
    name: String,
    main: String,
    rgb: RgbColor,
}

/// Collects named colors in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    entries: Vec<PendingColor>,
}

impl PaletteBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color under `name`.
    ///
    /// Reusing a name replaces the earlier color but keeps its position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if `main_hex` is not a 3 or 6 digit hex color and
    /// `EmptyName` if `name` is blank.
    pub fn add_color(&mut self, name: &str, main_hex: &str) -> PaletteResult<()> {
        let main = main_hex.trim();
        if !is_hex_color(main) {
            return Err(PaletteError::InvalidColor(main_hex.to_string()));
        }
        let rgb =
            RgbColor::from_hex(main).map_err(|_| PaletteError::InvalidColor(main_hex.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }

        let entry = PendingColor {
            name: name.to_string(),
            main: main.to_string(),
            rgb,
        };

        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    /// Number of colors collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no color has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derives the base color and all shades for every entry.
    #[must_use]
    pub fn finalize(self) -> Palette {
        let families = self
            .entries
            .into_iter()
            .map(|entry| {
                let family = ColorFamily::derive(entry.name, entry.main, entry.rgb);
                debug!(
                    name = %family.name,
                    main = %family.main_rgb,
                    base = %family.base,
                    "derived color family"
                );
                family
            })
            .collect();

        Palette { families }
    }
}

/// A base color with its derived midpoint and shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFamily {
    /// Unique, non-empty name given by the user.
    pub name: String,
    /// The hex value as entered (may be 3 digits, may lack '#').
    pub main: String,
    /// Parsed main color.
    pub main_rgb: RgbColor,
    /// The main color at lightness 0.5.
    pub base: RgbColor,
    shades: [RgbColor; ShadeLevel::COUNT],
}

impl ColorFamily {
    fn derive(name: String, main: String, main_rgb: RgbColor) -> Self {
        let shades = ShadeLevel::ALL.map(|level| main_rgb.with_lightness(level.lightness()));
        Self {
            name,
            main,
            main_rgb,
            base: main_rgb.with_lightness(BASE_LIGHTNESS),
            shades,
        }
    }

    /// The color derived for `level`.
    #[must_use]
    pub const fn shade(&self, level: ShadeLevel) -> RgbColor {
        self.shades[level.index()]
    }

    /// All shades paired with their level, in ascending lightness order.
    pub fn shades(&self) -> impl DoubleEndedIterator<Item = (ShadeLevel, RgbColor)> + '_ {
        ShadeLevel::ALL
            .iter()
            .map(move |&level| (level, self.shade(level)))
    }
}

/// A finalized, read-only palette in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    families: Vec<ColorFamily>,
}

impl Palette {
    /// Families in insertion order.
    #[must_use]
    pub fn families(&self) -> &[ColorFamily] {
        &self.families
    }

    /// Looks up a family by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Color names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns true if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_color_validates_hex() {
        let mut builder = PaletteBuilder::new();
        assert_eq!(
            builder.add_color("brand", "#33"),
            Err(PaletteError::InvalidColor("#33".to_string()))
        );
        assert!(builder.is_empty());

        builder.add_color("brand", "#3366CC").unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_add_color_rejects_empty_name() {
        let mut builder = PaletteBuilder::new();
        assert_eq!(builder.add_color("  ", "#fff"), Err(PaletteError::EmptyName));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let mut builder = PaletteBuilder::new();
        builder.add_color("a", "#111111").unwrap();
        builder.add_color("b", "#222222").unwrap();
        builder.add_color("a", "#333333").unwrap();

        let palette = builder.finalize();
        assert_eq!(palette.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(palette.get("a").unwrap().main, "#333333");
    }

    #[test]
    fn test_finalize_derives_base_and_shades() {
        let mut builder = PaletteBuilder::new();
        builder.add_color("brand", "#3366CC").unwrap();
        let palette = builder.finalize();

        let family = palette.get("brand").unwrap();
        let main = RgbColor::from_hex("#3366CC").unwrap();
        assert_eq!(family.main_rgb, main);
        assert_eq!(family.base, main.with_lightness(0.5));
        assert_eq!(family.shade(ShadeLevel::L50), family.base);
        for (level, color) in family.shades() {
            assert_eq!(color, main.with_lightness(level.lightness()));
        }
        assert_eq!(family.shades().count(), 11);
    }

    #[test]
    fn test_main_is_kept_as_entered() {
        let mut builder = PaletteBuilder::new();
        builder.add_color("short", "abc").unwrap();
        let palette = builder.finalize();
        let family = palette.get("short").unwrap();
        assert_eq!(family.main, "abc");
        assert_eq!(family.main_rgb.to_hex(), "#aabbcc");
    }

    #[test]
    fn test_empty_palette() {
        let palette = PaletteBuilder::new().finalize();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
        assert!(palette.get("anything").is_none());
    }
}
