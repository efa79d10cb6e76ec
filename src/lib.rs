//! # Stickerprint - Barcode Sticker Generator
//!
//! Stickerprint turns a spreadsheet of `(barcode, product name)` rows into
//! one PNG sticker per row. It provides:
//!
//! - **Barcode encoding**: Code128 with automatic code-set selection
//! - **Label fitting**: the largest font size that fits the sticker width
//! - **Composition**: a fixed 400x150 sticker layout written as PNG
//! - **Dispatch**: parallel rendering on a bounded worker pool
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use stickerprint::{
//!     dispatch::{Dispatcher, prepare_output_dir},
//!     input::load_entries,
//!     render::font::LabelFont,
//! };
//!
//! // Read the first sheet of the workbook
//! let entries = load_entries(Path::new("data.xlsx"))?;
//!
//! // Load the font once; every task shares it
//! let font = LabelFont::embedded()?;
//!
//! // Render one sticker per entry into out/
//! prepare_output_dir(Path::new("out"))?;
//! let report = Dispatcher::new(&font, "out").run(&entries)?.into_result()?;
//! println!("{} stickers written", report.written.len());
//!
//! # Ok::<(), stickerprint::error::StickerError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entry`] | Input records and caption trimming |
//! | [`input`] | Spreadsheet loading |
//! | [`render`] | Barcode, font fitting and sticker composition |
//! | [`dispatch`] | Parallel fan-out and run reports |
//! | [`layout`] | Sticker geometry |
//! | [`error`] | Error types |

pub mod dispatch;
pub mod entry;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod render;

// Re-exports for convenience
pub use entry::{Entries, Entry};
pub use error::StickerError;
pub use layout::StickerLayout;
