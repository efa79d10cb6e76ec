//! # Sticker Layout
//!
//! Fixed geometry of a sticker. Every sticker in a run shares one layout.
//!
//! ```text
//! ┌──────────────────── 400 ────────────────────┐
//! │ 10px padding                                │
//! │ ▌▌ ▌▌▌ ▌ ▌▌ barcode 400x100 ▌▌ ▌ ▌▌▌ ▌▌ ▌   │
//! │                890123           ← y = h-32  │ 150
//! │             Product name        ← y = h-15  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use stickerprint::layout::StickerLayout;
//!
//! let layout = StickerLayout::STANDARD;
//! assert_eq!(layout.label_max_width(), 380.0);
//! ```

/// Geometry and type sizes of a sticker canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerLayout {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Barcode bitmap height (its width is the canvas width)
    pub barcode_height: u32,

    /// Gap above the barcode
    pub padding_top: u32,

    /// Horizontal margin on each side of the product label
    pub side_margin: u32,

    /// Point size of the trimmed barcode caption
    pub caption_size: f32,

    /// Distance from the bottom edge to the caption anchor
    pub caption_offset: u32,

    /// Distance from the bottom edge to the product label anchor
    pub label_offset: u32,

    /// Largest point size tried when fitting the product label
    pub label_max_size: u32,
}

impl StickerLayout {
    /// The 400x150 sticker.
    pub const STANDARD: Self = Self {
        width: 400,
        height: 150,
        barcode_height: 100,
        padding_top: 10,
        side_margin: 10,
        caption_size: 14.0,
        caption_offset: 32,
        label_offset: 15,
        label_max_size: 20,
    };

    /// Pixel budget available to the product label.
    #[inline]
    pub fn label_max_width(&self) -> f32 {
        self.width.saturating_sub(2 * self.side_margin) as f32
    }

    /// Horizontal center of the canvas.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width as f32 / 2.0
    }

    #[inline]
    pub fn caption_y(&self) -> f32 {
        self.height as f32 - self.caption_offset as f32
    }

    #[inline]
    pub fn label_y(&self) -> f32 {
        self.height as f32 - self.label_offset as f32
    }
}

impl Default for StickerLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
