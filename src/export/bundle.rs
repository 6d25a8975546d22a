//! Design-tool variable bundles.
//!
//! Each color becomes one JSON document of typed color variables, grouped
//! under a caller-supplied collection name:
//!
//! ```json
//! {
//!   "brand-kit": {
//!     "brand": {
//!       "0.05": { "$type": "color", "$value": "#050a14" },
//!       "0.1":  { "$type": "color", "$value": "#0a1428" }
//!     }
//!   }
//! }
//! ```
//!
//! Only the shade levels are emitted; `main` and `base` are not part of a bundle.

use anyhow::{Context, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::{ColorFamily, RgbColor};

/// A single typed design variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorVariable {
    /// Always "color".
    #[serde(rename = "$type")]
    pub kind: &'static str,
    /// Lowercase `#rrggbb` value.
    #[serde(rename = "$value")]
    pub value: String,
}

impl ColorVariable {
    fn new(color: RgbColor) -> Self {
        Self {
            kind: "color",
            value: color.to_hex(),
        }
    }
}

/// Bundle document for one color family.
#[derive(Debug, Clone, Copy)]
pub struct BundleDocument<'a> {
    group: &'a str,
    family: &'a ColorFamily,
}

/// Builds the bundle document for `family` under `group`.
pub const fn bundle_document<'a>(family: &'a ColorFamily, group: &'a str) -> BundleDocument<'a> {
    BundleDocument { group, family }
}

/// Renders the bundle document for `family` as JSON.
pub fn render_bundle(family: &ColorFamily, group: &str) -> Result<String> {
    serde_json::to_string(&bundle_document(family, group))
        .with_context(|| format!("Failed to serialize bundle for '{}'", family.name))
}

impl Serialize for BundleDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.group, &ColorEntry(self.family))?;
        map.end()
    }
}

struct ColorEntry<'a>(&'a ColorFamily);

impl Serialize for ColorEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.name, &ShadeVariables(self.0))?;
        map.end()
    }
}

struct ShadeVariables<'a>(&'a ColorFamily);

impl Serialize for ShadeVariables<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Keep ascending shade order regardless of the JSON map backing
        let mut map = serializer.serialize_map(Some(crate::models::ShadeLevel::COUNT))?;
        for (level, color) in self.0.shades() {
            map.serialize_entry(level.label(), &ColorVariable::new(color))?;
        }
        map.end()
    }
}
