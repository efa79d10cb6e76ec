//! # Spreadsheet Input
//!
//! Reads `(barcode, product name)` rows from the first sheet of a workbook.
//!
//! Rows are read as a spreadsheet user sees them: trailing empty cells are
//! dropped, so a row with fewer than two filled-in leading cells is skipped.
//! There is no header detection; a header row is read as data.

use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

use crate::entry::Entries;
use crate::error::StickerError;

/// Load every entry from the first sheet of the workbook at `path`.
///
/// Supports xlsx, xlsm, xlsb, xls and ods.
pub fn load_entries(path: &Path) -> Result<Entries, StickerError> {
    if !path.exists() {
        return Err(StickerError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| StickerError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            StickerError::Spreadsheet(format!("{}: workbook has no sheets", path.display()))
        })?
        .map_err(|e| StickerError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let entries = entries_from_rows(rows_from_range(&range));
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded spreadsheet");
    Ok(entries)
}

/// Flatten a sheet into rows of cell text.
///
/// Columns left of the used range come back as empty strings and trailing
/// empty cells are dropped from every row.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    let first_col = range.start().map_or(0, |(_, col)| col as usize);

    range
        .rows()
        .map(|cells| {
            let mut row: Vec<String> = std::iter::repeat_n(String::new(), first_col)
                .chain(cells.iter().map(|cell| cell.to_string()))
                .collect();
            while row.last().is_some_and(|cell| cell.is_empty()) {
                row.pop();
            }
            row
        })
        .collect()
}

/// Build entries from rows of `[barcode, product name, ...]`.
///
/// Rows with fewer than two cells are skipped. A later row with the same
/// barcode replaces an earlier one.
pub fn entries_from_rows<I>(rows: I) -> Entries
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut entries = Entries::new();
    for (index, row) in rows.into_iter().enumerate() {
        let mut cells = row.into_iter();
        match (cells.next(), cells.next()) {
            (Some(code), Some(label)) => {
                if let Some(previous) = entries.insert(code, label) {
                    tracing::debug!(
                        row = index + 1,
                        previous = %previous,
                        "duplicate barcode replaced"
                    );
                }
            }
            _ => tracing::debug!(row = index + 1, "skipped row with fewer than two cells"),
        }
    }
    entries
}
