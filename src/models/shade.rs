//! The fixed set of lightness levels every color family is derived at.

use std::fmt;

/// One of the eleven lightness fractions a shade is generated for.
///
/// Levels are ordered from darkest (`L05`, lightness 0.05) to lightest
/// (`L95`, lightness 0.95). They are used as keys instead of raw floats so
/// lookups never depend on float equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeLevel {
    /// Lightness 0.05
    L05,
    /// Lightness 0.1
    L10,
    /// Lightness 0.2
    L20,
    /// Lightness 0.3
    L30,
    /// Lightness 0.4
    L40,
    /// Lightness 0.5
    L50,
    /// Lightness 0.6
    L60,
    /// Lightness 0.7
    L70,
    /// Lightness 0.8
    L80,
    /// Lightness 0.9
    L90,
    /// Lightness 0.95
    L95,
}

impl ShadeLevel {
    /// All levels in ascending lightness order.
    pub const ALL: [Self; 11] = [
        Self::L05,
        Self::L10,
        Self::L20,
        Self::L30,
        Self::L40,
        Self::L50,
        Self::L60,
        Self::L70,
        Self::L80,
        Self::L90,
        Self::L95,
    ];

    /// Number of shade levels in a family.
    pub const COUNT: usize = Self::ALL.len();

    /// The lightness fraction for this level.
    #[must_use]
    pub const fn lightness(self) -> f64 {
        match self {
            Self::L05 => 0.05,
            Self::L10 => 0.1,
            Self::L20 => 0.2,
            Self::L30 => 0.3,
            Self::L40 => 0.4,
            Self::L50 => 0.5,
            Self::L60 => 0.6,
            Self::L70 => 0.7,
            Self::L80 => 0.8,
            Self::L90 => 0.9,
            Self::L95 => 0.95,
        }
    }

    /// Canonical label used as row label and bundle key (e.g. "0.05", "0.1").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::L05 => "0.05",
            Self::L10 => "0.1",
            Self::L20 => "0.2",
            Self::L30 => "0.3",
            Self::L40 => "0.4",
            Self::L50 => "0.5",
            Self::L60 => "0.6",
            Self::L70 => "0.7",
            Self::L80 => "0.8",
            Self::L90 => "0.9",
            Self::L95 => "0.95",
        }
    }

    /// Position of this level in [`ShadeLevel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
