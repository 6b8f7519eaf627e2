// File: crates/benchviz-core/src/color.rs
// Summary: Color parsing (named, single-letter, hex) and categorical palettes for series lines.

use palette::{Hsl, IntoColor, Srgb};
use skia_safe as skia;

use crate::error::{Error, Result};

/// Ten-color categorical palette used for relational (hue-keyed) charts.
const DEEP: [(u8, u8, u8); 10] = [
    (0x4c, 0x72, 0xb0),
    (0xdd, 0x84, 0x52),
    (0x55, 0xa8, 0x68),
    (0xc4, 0x4e, 0x52),
    (0x81, 0x72, 0xb3),
    (0x93, 0x78, 0x60),
    (0xda, 0x8b, 0xc3),
    (0x8c, 0x8c, 0x8c),
    (0xcc, 0xb9, 0x74),
    (0x64, 0xb5, 0xcd),
];

const NAMED: &[(&str, (u8, u8, u8))] = &[
    // single-letter shorthands
    ("b", (0, 0, 255)),
    ("g", (0, 128, 0)),
    ("r", (255, 0, 0)),
    ("c", (0, 191, 191)),
    ("m", (191, 0, 191)),
    ("y", (191, 191, 0)),
    ("k", (0, 0, 0)),
    ("w", (255, 255, 255)),
    // CSS names
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("olive", (128, 128, 0)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    // tab10
    ("tab:blue", (0x1f, 0x77, 0xb4)),
    ("tab:orange", (0xff, 0x7f, 0x0e)),
    ("tab:green", (0x2c, 0xa0, 0x2c)),
    ("tab:red", (0xd6, 0x27, 0x28)),
    ("tab:purple", (0x94, 0x67, 0xbd)),
    ("tab:brown", (0x8c, 0x56, 0x4b)),
    ("tab:pink", (0xe3, 0x77, 0xc2)),
    ("tab:gray", (0x7f, 0x7f, 0x7f)),
    ("tab:olive", (0xbc, 0xbd, 0x22)),
    ("tab:cyan", (0x17, 0xbe, 0xcf)),
];

/// Parse a color given as a name (`green`, `tab:blue`), a single-letter code (`g`)
/// or hex (`#rrggbb`, `#rrggbbaa`).
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let key = s.trim().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()));
    }
    NAMED
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, (r, g, b))| skia::Color::from_rgb(r, g, b))
        .ok_or_else(|| Error::InvalidColor(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<skia::Color> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            skia::Color::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colors for `n` hue-keyed lines: the fixed categorical palette while it lasts,
/// evenly spaced hues beyond that.
pub fn categorical(n: usize) -> Vec<skia::Color> {
    if n <= DEEP.len() {
        DEEP.iter()
            .take(n)
            .map(|&(r, g, b)| skia::Color::from_rgb(r, g, b))
            .collect()
    } else {
        generate_palette(n)
    }
}
