//! CSV export of the palette.
//!
//! Each color takes four columns (HEX, R, G, B). Data rows hold the hex value
//! and an `r,g,b` string per color; joining with commas spreads the RGB string
//! across the R, G and B columns.

use crate::models::{Palette, RgbColor, ShadeLevel};

/// Builds the CSV as rows of cells before joining.
///
/// The two header rows have `1 + 4 * n` cells; data rows have `1 + 2 * n`.
pub fn csv_rows(palette: &Palette) -> Vec<Vec<String>> {
    let families = palette.families();
    let mut rows = Vec::with_capacity(2 + 2 + ShadeLevel::COUNT);

    let mut names = vec![String::new()];
    let mut columns = vec![String::new()];
    for family in families {
        names.extend([family.name.clone(), String::new(), String::new(), String::new()]);
        columns.extend(["HEX", "R", "G", "B"].map(String::from));
    }
    rows.push(names);
    rows.push(columns);

    rows.push(data_row("main", families.iter().map(|f| f.main_rgb)));
    rows.push(data_row("base", families.iter().map(|f| f.base)));
    for level in ShadeLevel::ALL {
        rows.push(data_row(level.label(), families.iter().map(|f| f.shade(level))));
    }

    rows
}

fn data_row(label: &str, colors: impl Iterator<Item = RgbColor>) -> Vec<String> {
    let mut row = vec![label.to_string()];
    for color in colors {
        row.push(color.to_hex());
        row.push(color.to_rgb_string());
    }
    row
}

/// Renders the palette as CSV text (rows joined by `\n`, no trailing newline).
pub fn render_csv(palette: &Palette) -> String {
    csv_rows(palette)
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}
