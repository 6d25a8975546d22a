//! RGB color handling with hex parsing and HSL lightness adjustment.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{PaletteError, PaletteResult};

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
});

/// Returns true if `s` is a 3 or 6 digit hex color, with or without a leading `#`.
///
/// # Examples
///
/// ```
/// use palettegen::models::rgb::is_hex_color;
///
/// assert!(is_hex_color("#3366CC"));
/// assert!(is_hex_color("abc"));
/// assert!(!is_hex_color("#3366C"));
/// assert!(!is_hex_color("#GGGGGG"));
/// ```
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_REGEX.is_match(s)
}

/// Normalizes any valid hex color to the lowercase `#rrggbb` form.
///
/// Three digit colors are expanded by digit duplication (`#abc` becomes `#aabbcc`).
pub fn normalize_hex(hex: &str) -> PaletteResult<String> {
    RgbColor::from_hex(hex).map(|color| color.to_hex())
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in any letter case.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("0a0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 170, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidFormat` if the string is not 3 or 6 hex digits.
    pub fn from_hex(hex: &str) -> PaletteResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || PaletteError::InvalidFormat(hex.to_string());

        // from_str_radix tolerates a leading '+', so check the digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            3 => {
                // 0xA * 0x11 == 0xAA
                let channel = |index: usize| {
                    u8::from_str_radix(&digits[index..=index], 16)
                        .map(|nibble| nibble * 0x11)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to the upper-case display form "#RRGGBB".
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the channels as "r,g,b".
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// All components are fractions in 0.0-1.0. Grayscale colors have no
    /// defined hue; they always report hue 0.0 and saturation 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// let hsl = RgbColor::new(255, 0, 0).to_hsl();
    /// assert!(hsl.h.abs() < 1e-9);
    /// assert!((hsl.s - 1.0).abs() < 1e-9);
    /// assert!((hsl.l - 0.5).abs() < 1e-9);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;

        let l = sum / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            // Not `2.0 - sum`: the two differ in the last bit for some inputs
            range / (2.0 - max - min)
        };

        // Distance of each channel from the maximum, relative to the range
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsl {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            l,
        }
    }

    /// Returns this color with its HSL lightness replaced, keeping hue and saturation.
    ///
    /// Channels are truncated, not rounded, when scaling back to 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(white.with_lightness(0.5), RgbColor::new(127, 127, 127));
    /// ```
    #[must_use]
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Hsl {
            l: lightness,
            ..self.to_hsl()
        }
        .to_rgb()
    }
}

/// A color in HSL space, every component a fraction in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

impl Hsl {
    /// Converts back to RGB, truncating each scaled channel to an integer.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let m2 = if self.l <= 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - (self.l * self.s)
            };
            let m1 = 2.0 * self.l - m2;
            (
                hue_to_channel(m1, m2, self.h + 1.0 / 3.0),
                hue_to_channel(m1, m2, self.h),
                hue_to_channel(m1, m2, self.h - 1.0 / 3.0),
            )
        };

        RgbColor::new(scale_channel(r), scale_channel(g), scale_channel(b))
    }
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn scale_channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0).trunc() as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#FF0000"));
        assert!(is_hex_color("ff0000"));
        assert!(is_hex_color("#abc"));
        assert!(is_hex_color("ABC"));

        assert!(!is_hex_color(""));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#ab"));
        assert!(!is_hex_color("#abcd"));
        assert!(!is_hex_color("#FFFFFFF"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("##fff"));
        assert!(!is_hex_color(" #fff"));
        assert!(!is_hex_color("#fff\n"));
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_short_form_duplicates_digits() {
        assert_eq!(
            RgbColor::from_hex("#abc").unwrap(),
            RgbColor::new(0xaa, 0xbb, 0xcc)
        );
        assert_eq!(RgbColor::from_hex("F00").unwrap(), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        for input in ["#FFFF", "#FFFFFFF", "GGGGGG", "", "#", "+f+f+f", "#12 456"] {
            assert_eq!(
                RgbColor::from_hex(input),
                Err(PaletteError::InvalidFormat(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex_upper(), "#0080FF");
        assert_eq!(RgbColor::new(0, 128, 255).to_rgb_string(), "0,128,255");
    }

    #[test]
    fn test_roundtrip_all_channel_values() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let original = RgbColor::new(r, g, b);
                    let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
                    assert_eq!(original, parsed);
                }
            }
        }
    }

    #[test]
    fn test_with_lightness_reference_values() {
        // (input, lightness, expected), including inputs lighter than 0.5
        let cases = [
            ((128, 117, 139), 0.2, (51, 46, 55)),
            ((149, 131, 113), 0.6, (167, 152, 138)),
            ((105, 118, 235), 0.1, (6, 9, 44)),
            ((255, 215, 41), 0.9, (254, 245, 204)),
            ((215, 255, 228), 0.9, (204, 254, 220)),
            ((140, 233, 73), 0.6, (140, 233, 72)),
            ((255, 84, 56), 0.9, (254, 211, 204)),
            ((171, 236, 121), 0.6, (143, 229, 76)),
            ((252, 191, 54), 0.6, (252, 191, 53)),
            ((248, 109, 133), 0.3, (146, 6, 30)),
            ((251, 55, 162), 0.1, (50, 0, 27)),
            ((187, 235, 155), 0.6, (139, 220, 85)),
            ((51, 102, 204), 0.5, (50, 101, 204)),
            ((224, 122, 95), 0.5, (213, 77, 41)),
        ];

        for ((r, g, b), lightness, (er, eg, eb)) in cases {
            assert_eq!(
                RgbColor::new(r, g, b).with_lightness(lightness),
                RgbColor::new(er, eg, eb),
                "({r},{g},{b}) at {lightness}"
            );
        }
    }

    #[test]
    fn test_normalize_hex_is_idempotent() {
        let once = normalize_hex("#ABC").unwrap();
        assert_eq!(once, "#aabbcc");
        assert_eq!(normalize_hex(&once).unwrap(), once);
        assert!(normalize_hex("nope").is_err());
    }

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        let hsl = RgbColor::new(0, 255, 0).to_hsl();
        assert!((hsl.h - 1.0 / 3.0).abs() < 1e-9);
        assert!((hsl.s - 1.0).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);

        let hsl = RgbColor::new(0, 0, 255).to_hsl();
        assert!((hsl.h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        for value in [0u8, 64, 128, 255] {
            let hsl = RgbColor::new(value, value, value).to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!((hsl.l - f64::from(value) / 255.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hue_wraps_for_magenta_side() {
        // Red max with blue above green gives a negative raw hue
        let hsl = RgbColor::new(255, 0, 128).to_hsl();
        assert!(hsl.h > 0.9 && hsl.h < 1.0);
    }

    #[test]
    fn test_with_lightness_gray_is_hue_independent() {
        assert_eq!(
            RgbColor::new(255, 255, 255).with_lightness(0.5),
            RgbColor::new(127, 127, 127)
        );
        assert_eq!(
            RgbColor::new(10, 10, 10).with_lightness(0.5),
            RgbColor::new(127, 127, 127)
        );
        assert_eq!(
            RgbColor::new(0, 0, 0).with_lightness(0.1),
            RgbColor::new(25, 25, 25)
        );
    }

    #[test]
    fn test_with_lightness_extremes() {
        let color = RgbColor::from_hex("#3366CC").unwrap();
        assert_eq!(color.with_lightness(0.0), RgbColor::new(0, 0, 0));
        assert_eq!(color.with_lightness(1.0), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_with_lightness_preserves_hue_ordering() {
        // Blue stays the dominant channel at every lightness
        let color = RgbColor::from_hex("#3366CC").unwrap();
        for lightness in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let shade = color.with_lightness(lightness);
            assert!(shade.b >= shade.g && shade.g >= shade.r, "{shade:?}");
        }
    }

    #[test]
    fn test_with_lightness_is_monotonic() {
        let color = RgbColor::from_hex("#e07a5f").unwrap();
        let dark = color.with_lightness(0.2);
        let light = color.with_lightness(0.8);
        assert!(dark.r <= light.r && dark.g <= light.g && dark.b <= light.b);
    }

    #[test]
    fn test_with_lightness_is_deterministic() {
        let color = RgbColor::new(12, 200, 99);
        assert_eq!(color.with_lightness(0.35), color.with_lightness(0.35));
    }

    #[test]
    fn test_from_str() {
        let color: RgbColor = "#0f0".parse().unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));
        assert_eq!(color.to_string(), "#00ff00");
    }
}
