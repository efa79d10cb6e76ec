//! # Error Types
//!
//! This module defines error types used throughout the stickerprint library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sticker generation
#[derive(Debug, Error)]
pub enum StickerError {
    /// The input spreadsheet does not exist
    #[error("Create a excel file called: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The spreadsheet exists but could not be read
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Barcode payload is not representable in Code128
    #[error("Cannot encode '{code}' as Code128: {reason}")]
    Encoding { code: String, reason: String },

    /// Barcode symbol does not fit the target bitmap
    #[error("Can not scale barcode of {modules} modules to a width of {width}px")]
    Scaling { modules: usize, width: u32 },

    /// Barcode too short to derive a caption from
    #[error("barcode is too short: {0}")]
    InvalidCode(String),

    /// Font file missing or not a usable TrueType/OpenType font
    #[error("Font error: {0}")]
    FontLoad(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Worker pool could not be started
    #[error("Worker pool error: {0}")]
    Pool(String),

    /// A single sticker failed (fail-fast mode)
    #[error("sticker {code}: {source}")]
    Sticker {
        code: String,
        #[source]
        source: Box<StickerError>,
    },

    /// Some stickers failed while the rest were written
    #[error("{failed} of {total} stickers failed")]
    Incomplete { failed: usize, total: usize },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StickerError {
    /// Attach the raw barcode of the entry that produced this error.
    pub fn for_code(self, code: &str) -> Self {
        StickerError::Sticker {
            code: code.to_string(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = StickerError::InputNotFound(PathBuf::from("data.xlsx"));
        assert_eq!(err.to_string(), "Create a excel file called: data.xlsx");
    }

    #[test]
    fn test_for_code_names_entry() {
        let err = StickerError::InvalidCode("A".into()).for_code("A");
        assert_eq!(err.to_string(), "sticker A: barcode is too short: A");
        assert!(std::error::Error::source(&err).is_some());
    }
}
