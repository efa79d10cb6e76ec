//! Sticker composition.
//!
//! A sticker is a white canvas with the barcode across the top, the trimmed
//! code under the bars, and the product name at the bottom, shrunk until it
//! fits between the side margins.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, imageops};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::barcode;
use super::fit::fit_font_size;
use super::font::{Anchor, LabelFont};
use crate::entry::Entry;
use crate::error::StickerError;
use crate::layout::StickerLayout;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A rendered sticker, ready to be written out.
#[derive(Debug, Clone)]
pub struct Sticker {
    /// Trimmed code printed under the bars; also the file stem
    pub caption: String,
    /// Point size the product label was drawn at
    pub label_size: u32,
    pub image: RgbImage,
}

impl Sticker {
    /// Render `entry` onto a fresh canvas.
    ///
    /// The caption is derived before any drawing, so an invalid code fails
    /// without doing rendering work.
    pub fn compose(
        entry: &Entry,
        font: &LabelFont,
        layout: &StickerLayout,
    ) -> Result<Self, StickerError> {
        let caption = entry.caption()?.to_string();

        let bars = barcode::encode(&entry.code, layout.width, layout.barcode_height)?;

        let mut image = RgbImage::from_pixel(layout.width, layout.height, WHITE);
        let bars = DynamicImage::ImageLuma8(bars).to_rgb8();
        imageops::replace(&mut image, &bars, 0, layout.padding_top as i64);

        let label_size = fit_font_size(
            font,
            &entry.label,
            layout.label_max_width(),
            layout.label_max_size,
        );

        font.draw_anchored(
            &mut image,
            &caption,
            layout.caption_size,
            (layout.center_x(), layout.caption_y()),
            Anchor::CENTER,
            BLACK,
        );
        font.draw_anchored(
            &mut image,
            &entry.label,
            label_size as f32,
            (layout.center_x(), layout.label_y()),
            Anchor::CENTER,
            BLACK,
        );

        Ok(Self {
            caption,
            label_size,
            image,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.caption)
    }

    /// Encode the canvas as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, StickerError> {
        let mut png_bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| StickerError::Image(format!("Failed to encode PNG: {}", e)))?;
        Ok(png_bytes)
    }

    /// Write the PNG into `dir`, replacing any file of the same name.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, StickerError> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_png()?)?;
        Ok(path)
    }
}

/// Compose the sticker for `entry` and write it into `out_dir`.
pub fn compose_to_file(
    entry: &Entry,
    font: &LabelFont,
    layout: &StickerLayout,
    out_dir: &Path,
) -> Result<PathBuf, StickerError> {
    let sticker = Sticker::compose(entry, font, layout)?;
    let path = sticker.save(out_dir)?;
    tracing::debug!(
        code = %entry.code,
        label_size = sticker.label_size,
        path = %path.display(),
        "wrote sticker"
    );
    Ok(path)
}
