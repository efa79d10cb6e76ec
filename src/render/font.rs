//! TTF font measurement and drawing for sticker captions.
//!
//! Text is measured and rasterized with ab_glyph from the same layout code,
//! so a size chosen by measuring is exactly the size that gets drawn.
//! Sizes are in points at 72 DPI (1pt = 1px).

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::StickerError;

/// DejaVu Sans Bold, embedded so the binary runs from any directory.
static DEJAVU_SANS_BOLD: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

/// Where a string is placed relative to its anchor point.
///
/// `(0.0, 0.0)` puts the anchor at the start of the baseline; `(0.5, 0.5)`
/// centers the text on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
}

/// A loaded font shared read-only by every sticker in a run.
///
/// Cloning is cheap; the font data is reference counted.
#[derive(Clone)]
pub struct LabelFont {
    font: FontArc,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl LabelFont {
    /// The embedded DejaVu Sans Bold.
    pub fn embedded() -> Result<Self, StickerError> {
        let font = FontArc::try_from_slice(DEJAVU_SANS_BOLD)
            .map_err(|e| StickerError::FontLoad(format!("embedded DejaVu Sans Bold: {}", e)))?;
        Ok(Self { font })
    }

    /// Load a TrueType/OpenType font from disk.
    pub fn from_path(path: &Path) -> Result<Self, StickerError> {
        let bytes = std::fs::read(path)
            .map_err(|e| StickerError::FontLoad(format!("{}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| StickerError::FontLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self { font })
    }

    /// The ab_glyph scale that renders one em at `points` pixels.
    ///
    /// ab_glyph scales by ascent-to-descent height, not by em size.
    pub fn px_scale(&self, points: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(2048.0);
        PxScale::from(points * self.font.height_unscaled() / units_per_em)
    }

    /// Nominal line height used for vertical anchoring.
    #[inline]
    pub fn line_height(&self, points: f32) -> f32 {
        points * 72.0 / 96.0
    }

    /// Horizontal pen position of every glyph in `text`, plus the total advance.
    fn layout(&self, text: &str, points: f32) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(self.px_scale(points));
        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret_x = 0.0f32;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret_x += scaled.kern(prev, glyph_id);
            }
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        (glyphs, caret_x)
    }

    /// Rendered width of `text` at `points`, in pixels.
    pub fn measure(&self, text: &str, points: f32) -> f32 {
        self.layout(text, points).1
    }

    /// Draw `text` onto `canvas` so that `anchor` of its box lands on `(x, y)`.
    ///
    /// Coverage is blended over the existing pixels, giving anti-aliased edges.
    /// Pixels outside the canvas are clipped.
    pub fn draw_anchored(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        points: f32,
        (x, y): (f32, f32),
        anchor: Anchor,
        color: Rgb<u8>,
    ) {
        let scale = self.px_scale(points);
        let (glyphs, width) = self.layout(text, points);
        let origin_x = x - anchor.x * width;
        let baseline_y = y + anchor.y * self.line_height(points);

        let (canvas_w, canvas_h) = canvas.dimensions();

        for (glyph_id, glyph_x) in glyphs {
            let position = point(origin_x + glyph_x, baseline_y);
            let glyph = glyph_id.with_scale_and_position(scale, position);
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let cx = px as i32 + bounds.min.x as i32;
                let cy = py as i32 + bounds.min.y as i32;
                if cx < 0 || cy < 0 || cx >= canvas_w as i32 || cy >= canvas_h as i32 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(cx as u32, cy as u32);
                let alpha = coverage.clamp(0.0, 1.0);
                for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                    let blended = *dst as f32 * (1.0 - alpha) + src as f32 * alpha;
                    *dst = blended.round() as u8;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> LabelFont {
        LabelFont::embedded().unwrap()
    }

    #[test]
    fn test_embedded_font_loads() {
        let font = font();
        assert!(font.measure("A", 14.0) > 0.0);
    }

    #[test]
    fn test_missing_font_file() {
        let err = LabelFont::from_path(Path::new("does/not/exist.ttf")).unwrap_err();
        assert!(matches!(err, StickerError::FontLoad(_)));
    }

    #[test]
    fn test_invalid_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(
            LabelFont::from_path(&path),
            Err(StickerError::FontLoad(_))
        ));
    }

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(font().measure("", 20.0), 0.0);
    }

    #[test]
    fn test_measure_grows_with_size() {
        let font = font();
        let small = font.measure("Widget", 10.0);
        let large = font.measure("Widget", 20.0);
        assert!(large > small);
        // Advances scale linearly with the point size
        assert!((large / small - 2.0).abs() < 0.05);
    }

    #[test]
    fn test_em_scale_matches_points() {
        // An "M" is a little under one em wide
        let font = font();
        let width = font.measure("M", 20.0);
        assert!(width > 10.0 && width < 30.0, "width was {width}");
    }

    #[test]
    fn test_draw_centered_text() {
        let font = font();
        let mut canvas = RgbImage::from_pixel(200, 60, Rgb([255, 255, 255]));
        font.draw_anchored(
            &mut canvas,
            "Hello",
            20.0,
            (100.0, 30.0),
            Anchor::CENTER,
            Rgb([0, 0, 0]),
        );

        let dark: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] < 128)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!dark.is_empty());

        let min_x = dark.iter().map(|p| p.0).min().unwrap();
        let max_x = dark.iter().map(|p| p.0).max().unwrap();
        let mid = (min_x + max_x) as f32 / 2.0;
        assert!((mid - 100.0).abs() < 4.0, "text centered at {mid}");
    }

    #[test]
    fn test_draw_clips_outside_canvas() {
        let font = font();
        let mut canvas = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        font.draw_anchored(
            &mut canvas,
            "Clipped text",
            40.0,
            (-50.0, 100.0),
            Anchor::CENTER,
            Rgb([0, 0, 0]),
        );
        assert!(canvas.pixels().all(|p| p.0 == [255, 255, 255]));
    }
}
