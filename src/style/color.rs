//! Color normalization.

use crate::model::Color;

/// Convert linear `[0, 1]` channels to a `#rrggbb` hex string.
///
/// Each channel is scaled to `[0, 255]`, rounded and clamped, so any input
/// (including out-of-range or NaN values) yields two valid hex digits.
///
/// ```
/// use figstyle::style::to_hex;
///
/// assert_eq!(to_hex(1.0, 0.0, 0.0), "#ff0000");
/// assert_eq!(to_hex(0.5, 0.5, 0.5), "#808080");
/// ```
pub fn to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Hex string of a color, alpha ignored.
pub fn color_hex(color: &Color) -> String {
    to_hex(color.r, color.g, color.b)
}

fn channel(v: f64) -> u8 {
    let scaled = (v * 255.0 + 0.5).floor();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, 255.0) as u8
    }
}
