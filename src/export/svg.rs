//! SVG swatch sheet.
//!
//! The sheet has two parts. A grid of large swatches shows each main color
//! with its name and hex code underneath, wrapping to a new row once the canvas
//! width is used up. Below it, every color gets a column of small swatches:
//! the main color first, then its shades from lightest to darkest, each
//! labelled in white.

// Allow intentional casts between grid counts and coordinates
#![allow(clippy::cast_precision_loss)]

use std::fmt::Write as _;

use crate::models::{Palette, RgbColor, ShadeLevel};

/// Canvas width.
pub const WIDTH: usize = 800;
/// Outer padding on every side.
pub const PADDING: usize = 25;
/// Vertical gap between the large grid and the shade columns.
pub const SPACING: usize = 50;
/// Edge length of a large swatch.
pub const LARGE_SWATCH: usize = 150;
/// Gap between large swatches (horizontal and vertical).
pub const LARGE_GAP: usize = 60;
/// Width of a small swatch.
pub const SMALL_WIDTH: usize = 100;
/// Height of a small swatch.
pub const SMALL_HEIGHT: usize = 50;

/// Default fill and label color.
const BACKGROUND: &str = "#fefefe";
const FONT_FAMILY: &str = "Helvetica";

/// Geometry of a sheet for a given number of colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgLayout {
    /// Large swatches per grid row.
    pub per_row: usize,
    /// Number of grid rows.
    pub rows: usize,
    /// Horizontal offset that centers the large grid.
    pub large_offset: f64,
    /// Horizontal offset that centers the shade columns (negative when they overflow).
    pub small_offset: f64,
    /// Canvas height.
    pub height: usize,
}

impl SvgLayout {
    /// Computes the layout for `count` colors.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        let inner = (WIDTH - PADDING * 2) as f64;
        let step = LARGE_SWATCH + LARGE_GAP;

        let per_row = (WIDTH - PADDING * 2) / step;
        let rows = count.div_ceil(per_row);
        let large_offset = (inner - (per_row * step - LARGE_GAP) as f64) / 2.0;
        let small_offset = (inner - (count * SMALL_WIDTH) as f64) / 2.0;

        // main swatch plus one per shade
        let column_height = SMALL_HEIGHT * (ShadeLevel::COUNT + 1);
        let height = PADDING * 2 + rows * step + SPACING + column_height;

        Self {
            per_row,
            rows,
            large_offset,
            small_offset,
            height,
        }
    }

    /// Top edge of the shade columns.
    fn columns_top(&self) -> usize {
        PADDING + self.rows * (LARGE_SWATCH + LARGE_GAP) + SPACING
    }
}

/// Renders the palette as an SVG document.
pub fn render_svg(palette: &Palette) -> String {
    let layout = SvgLayout::for_count(palette.len());
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg width="{WIDTH}" height="{}" xmlns="http://www.w3.org/2000/svg" fill="{BACKGROUND}">"#,
        layout.height
    );

    // Large swatch grid
    for (i, family) in palette.families().iter().enumerate() {
        let column = i % layout.per_row;
        let row = i / layout.per_row;
        let x = PADDING as f64 + layout.large_offset + (column * (LARGE_SWATCH + LARGE_GAP)) as f64;
        let y = (PADDING + row * (LARGE_SWATCH + LARGE_GAP)) as f64;
        let fill = family.main_rgb.to_hex();
        let center = x + LARGE_SWATCH as f64 / 2.0;
        let bottom = y + LARGE_SWATCH as f64;

        push_rect(&mut svg, x, y, LARGE_SWATCH, LARGE_SWATCH, &fill);
        push_text(&mut svg, center, bottom + 25.0, 20, &fill, &family.name);
        push_text(
            &mut svg,
            center,
            bottom + 45.0,
            16,
            &fill,
            &family.main_rgb.to_hex_upper(),
        );
    }

    // Shade columns
    let top = layout.columns_top();
    for (i, family) in palette.families().iter().enumerate() {
        let x = PADDING as f64 + layout.small_offset + (i * SMALL_WIDTH) as f64;

        push_small_swatch(&mut svg, x, top, family.main_rgb, &family.name);

        for (offset, (_, shade)) in family.shades().rev().enumerate() {
            let y = top + (offset + 1) * SMALL_HEIGHT;
            push_small_swatch(&mut svg, x, y, shade, &shade.to_hex_upper());
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_small_swatch(svg: &mut String, x: f64, y: usize, color: RgbColor, label: &str) {
    let y = y as f64;
    push_rect(svg, x, y, SMALL_WIDTH, SMALL_HEIGHT, &color.to_hex());
    push_text(
        svg,
        x + SMALL_WIDTH as f64 / 2.0,
        y + SMALL_HEIGHT as f64 / 2.0 + 5.0,
        20,
        BACKGROUND,
        label,
    );
}

fn push_rect(svg: &mut String, x: f64, y: f64, width: usize, height: usize, fill: &str) {
    let _ = writeln!(
        svg,
        r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" />"#
    );
}

fn push_text(svg: &mut String, x: f64, y: f64, size: u32, fill: &str, content: &str) {
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}" font-size="{size}" font-family="{FONT_FAMILY}" text-anchor="middle" fill="{fill}">{}</text>"#,
        escape_xml(content)
    );
}

/// Escapes the characters that are special in XML text and attributes.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
