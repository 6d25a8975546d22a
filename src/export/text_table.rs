//! Fixed-width text table of every color family.
//!
//! One column per color in palette order, one row for `main`, one for `base`
//! and one per shade level:
//!
//! ```text
//!      | brand                 | accent
//! main | #3366CC : 51,102,204  | #E07A5F : 224,122,95
//! base | #3265CC : 50,101,204  | #D54D29 : 213,77,41
//! 0.05 | #050A14 : 5,10,20     | #150704 : 21,7,4
//! ```

use std::fmt::Write as _;

use crate::models::{Palette, RgbColor, ShadeLevel};

/// Width every cell is padded to.
pub const CELL_WIDTH: usize = 21;

/// Width of the row label column ("main", "base", "0.05", ...).
const LABEL_WIDTH: usize = 4;

const SEPARATOR: &str = " | ";

/// Formats a single cell as `#RRGGBB : r,g,b`, padded to [`CELL_WIDTH`].
#[must_use]
pub fn format_cell(color: RgbColor) -> String {
    let cell = format!("{} : {}", color.to_hex_upper(), color.to_rgb_string());
    format!("{cell:<CELL_WIDTH$}")
}

/// Renders the palette as a fixed-width text table.
///
/// # Examples
///
/// ```
/// use palettegen::export::render_text_table;
/// use palettegen::models::PaletteBuilder;
///
/// let mut builder = PaletteBuilder::new();
/// builder.add_color("brand", "#3366CC").unwrap();
/// let table = render_text_table(&builder.finalize());
///
/// assert!(table.starts_with("     | brand\n"));
/// assert!(table.contains("main | #3366CC : 51,102,204"));
/// ```
pub fn render_text_table(palette: &Palette) -> String {
    let mut output = String::new();

    // Header: names are padded except the last
    let count = palette.len();
    let header: Vec<String> = palette
        .names()
        .enumerate()
        .map(|(i, name)| {
            if i + 1 < count {
                format!("{name:<CELL_WIDTH$}")
            } else {
                name.to_string()
            }
        })
        .collect();
    push_row(&mut output, "", &header);

    let families = palette.families();
    let main: Vec<String> = families.iter().map(|f| format_cell(f.main_rgb)).collect();
    push_row(&mut output, "main", &main);

    let base: Vec<String> = families.iter().map(|f| format_cell(f.base)).collect();
    push_row(&mut output, "base", &base);

    for level in ShadeLevel::ALL {
        let cells: Vec<String> = families
            .iter()
            .map(|f| format_cell(f.shade(level)))
            .collect();
        push_row(&mut output, level.label(), &cells);
    }

    output
}

fn push_row(output: &mut String, label: &str, cells: &[String]) {
    let _ = writeln!(
        output,
        "{label:<LABEL_WIDTH$}{SEPARATOR}{}",
        cells.join(SEPARATOR)
    );
}
