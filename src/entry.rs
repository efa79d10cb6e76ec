//! # Entries
//!
//! One row of input: a raw barcode payload and the product name printed
//! under it.

use std::collections::BTreeMap;

use crate::error::StickerError;

/// Characters dropped from the front of a code to form its caption.
pub const CAPTION_PREFIX: usize = 8;

/// Characters dropped from the end of a code to form its caption.
pub const CAPTION_SUFFIX: usize = 1;

/// Codes must be longer than this to have a caption.
pub const MIN_CODE_LEN: usize = 12;

/// Entries keyed by raw code. Inserting a duplicate code replaces the label.
pub type Entries = BTreeMap<String, String>;

/// A single sticker request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub label: String,
}

impl Entry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// The human-readable part of the code printed under the bars.
    ///
    /// Drops the first 8 and the last character. Codes of 12 characters or
    /// fewer are rejected.
    pub fn caption(&self) -> Result<&str, StickerError> {
        trim_code(&self.code)
    }
}

impl From<(&String, &String)> for Entry {
    fn from((code, label): (&String, &String)) -> Self {
        Entry::new(code.as_str(), label.as_str())
    }
}

/// Strip the caption prefix and suffix from `code`, counting characters.
pub fn trim_code(code: &str) -> Result<&str, StickerError> {
    let len = code.chars().count();
    if len <= MIN_CODE_LEN {
        return Err(StickerError::InvalidCode(code.to_string()));
    }

    let byte_at = |n: usize| code.char_indices().nth(n).map_or(code.len(), |(i, _)| i);
    Ok(&code[byte_at(CAPTION_PREFIX)..byte_at(len - CAPTION_SUFFIX)])
}
