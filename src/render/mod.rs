//! # Rendering Module
//!
//! The sticker-rendering pipeline.
//!
//! ## Modules
//!
//! - [`barcode`]: Code128 encoding and integer scaling to a fixed bitmap
//! - [`font`]: TrueType measurement and anti-aliased text drawing
//! - [`fit`]: Largest point size that fits a pixel budget
//! - [`sticker`]: Canvas composition and PNG output
//!
//! ## Usage Example
//!
//! ```
//! use stickerprint::entry::Entry;
//! use stickerprint::layout::StickerLayout;
//! use stickerprint::render::font::LabelFont;
//! use stickerprint::render::sticker::Sticker;
//!
//! let font = LabelFont::embedded()?;
//! let entry = Entry::new("012345678901234", "Widget");
//! let sticker = Sticker::compose(&entry, &font, &StickerLayout::STANDARD)?;
//!
//! assert_eq!(sticker.file_name(), "890123.png");
//! # Ok::<(), stickerprint::StickerError>(())
//! ```

pub mod barcode;
pub mod fit;
pub mod font;
pub mod sticker;
