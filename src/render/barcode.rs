//! Code128 symbol generation.
//!
//! Uses the barcoders crate for the bar patterns. The payload is split into
//! Code Set runs first (digit runs go to Set C, control characters to Set A,
//! everything else to Set B) and the resulting modules are scaled by an
//! integer factor, so bars keep hard edges.

use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};

use crate::error::StickerError;

const BAR: Luma<u8> = Luma([0]);
const SPACE: Luma<u8> = Luma([255]);

/// Shortest digit run worth switching to Code Set C for.
const MIN_SET_C_RUN: usize = 4;

/// Code128 character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSet {
    /// Upper case, digits, punctuation and control characters
    A,
    /// Printable ASCII
    B,
    /// Digit pairs
    C,
}

impl CodeSet {
    /// Marker character barcoders uses to select (or switch to) this set.
    fn marker(self) -> char {
        match self {
            CodeSet::A => '\u{00C0}',
            CodeSet::B => '\u{0181}',
            CodeSet::C => '\u{0106}',
        }
    }
}

/// Split `code` into runs, each tagged with the Code Set it is encoded in.
///
/// Fails when `code` is empty or contains characters outside ASCII 0-126.
/// DEL (127) has no Code128 symbol in barcoders.
pub fn plan_code_sets(code: &str) -> Result<Vec<(CodeSet, String)>, StickerError> {
    if code.is_empty() {
        return Err(encoding_error(code, "empty payload"));
    }
    if let Some(bad) = code.chars().find(|&c| !c.is_ascii() || c == '\x7f') {
        return Err(encoding_error(
            code,
            &format!("character {bad:?} is outside the Code128 set"),
        ));
    }

    let bytes = code.as_bytes();
    let mut runs: Vec<(CodeSet, String)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits >= MIN_SET_C_RUN {
            // An odd run leaves its first digit to the surrounding set.
            if digits % 2 == 1 {
                let set = text_set(bytes[i], runs.last().map(|r| r.0));
                push_char(&mut runs, set, bytes[i] as char);
                i += 1;
            }
            let end = i + digits - digits % 2;
            for &b in &bytes[i..end] {
                push_char(&mut runs, CodeSet::C, b as char);
            }
            i = end;
            continue;
        }

        let set = text_set(bytes[i], runs.last().map(|r| r.0));
        push_char(&mut runs, set, bytes[i] as char);
        i += 1;
    }

    Ok(runs)
}

/// Pick Set A or B for a single non-paired character.
fn text_set(byte: u8, current: Option<CodeSet>) -> CodeSet {
    match byte {
        0..=31 => CodeSet::A,
        32..=95 if current == Some(CodeSet::A) => CodeSet::A,
        _ => CodeSet::B,
    }
}

fn push_char(runs: &mut Vec<(CodeSet, String)>, set: CodeSet, ch: char) {
    match runs.last_mut() {
        Some((last, text)) if *last == set => text.push(ch),
        _ => runs.push((set, ch.to_string())),
    }
}

fn encoding_error(code: &str, reason: &str) -> StickerError {
    StickerError::Encoding {
        code: code.to_string(),
        reason: reason.to_string(),
    }
}

/// Encode `code` as Code128 modules (1 = bar, 0 = space).
pub fn encode_modules(code: &str) -> Result<Vec<u8>, StickerError> {
    let mut prefixed = String::with_capacity(code.len() * 2);
    for (set, text) in plan_code_sets(code)? {
        prefixed.push(set.marker());
        prefixed.push_str(&text);
    }

    let barcode = Code128::new(&prefixed).map_err(|e| encoding_error(code, &e.to_string()))?;
    Ok(barcode.encode())
}

/// Scale a row of modules to a `width` x `height` bitmap.
///
/// Each module becomes `width / modules` pixels wide. The symbol is centered
/// and the leftover columns stay white.
pub fn scale_modules(modules: &[u8], width: u32, height: u32) -> Result<GrayImage, StickerError> {
    let count = modules.len();
    let factor = if count == 0 { 0 } else { width as usize / count };
    if factor == 0 || height == 0 {
        return Err(StickerError::Scaling {
            modules: count,
            width,
        });
    }

    let offset = (width as usize - count * factor) / 2;
    let row: Vec<Luma<u8>> = (0..width as usize)
        .map(|x| {
            let module = x
                .checked_sub(offset)
                .map(|dx| dx / factor)
                .and_then(|idx| modules.get(idx));
            match module {
                Some(&1) => BAR,
                _ => SPACE,
            }
        })
        .collect();

    Ok(GrayImage::from_fn(width, height, |x, _| row[x as usize]))
}

/// Encode `code` and scale it to exactly `width` x `height` pixels.
pub fn encode(code: &str, width: u32, height: u32) -> Result<GrayImage, StickerError> {
    let modules = encode_modules(code)?;
    tracing::debug!(code, modules = modules.len(), "encoded barcode");
    scale_modules(&modules, width, height)
}
