//! Label fitting: the largest point size at which a string fits a width.

use super::font::LabelFont;

/// Smallest size ever returned, even when nothing fits.
pub const MIN_FONT_SIZE: u32 = 1;

/// Find the largest integral size in `1..=max_size` at which `text` is at
/// most `max_width` pixels wide.
///
/// Sizes are tried from `max_size` down in steps of one. When even size 1
/// overflows, 1 is returned anyway.
pub fn fit_font_size(font: &LabelFont, text: &str, max_width: f32, max_size: u32) -> u32 {
    (MIN_FONT_SIZE..=max_size.max(MIN_FONT_SIZE))
        .rev()
        .find(|&size| font.measure(text, size as f32) <= max_width)
        .unwrap_or(MIN_FONT_SIZE)
}
