//! Human-readable board coordinates.
//!
//! Columns are letters starting at 'A' with 'I' left out (so 'H' is followed
//! by 'J'); rows are numbers counted from the bottom edge, 1 to `size`.
//! Internally row 0 is the top, so "A1" on a 9x9 board is `Coord { row: 8, col: 0 }`.

use thiserror::Error;

use crate::constants::SKIPPED_COLUMN;
use crate::grid::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("coordinate must include column and row (e.g., D4)")]
    TooShort,
    #[error("invalid column {0:?}")]
    InvalidColumn(char),
    #[error("invalid row number")]
    InvalidRow,
    #[error("row must be between 1 and {size}")]
    RowOutOfRange { size: usize },
}

/// Column labels for a board of `size` columns.
pub fn column_labels(size: usize) -> Vec<char> {
    ('A'..='Z')
        .filter(|&c| c != SKIPPED_COLUMN)
        .take(size)
        .collect()
}

/// Parse a coordinate such as "D4" (case-insensitive, surrounding spaces ignored).
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, NotationError> {
    let s = input.trim().to_ascii_uppercase();
    let mut chars = s.chars();
    let col_label = chars.next().ok_or(NotationError::TooShort)?;
    let row_text = chars.as_str();
    if row_text.is_empty() {
        return Err(NotationError::TooShort);
    }

    let col = column_labels(size)
        .iter()
        .position(|&l| l == col_label)
        .ok_or(NotationError::InvalidColumn(col_label))?;

    let row_num: usize = row_text.parse().map_err(|_| NotationError::InvalidRow)?;
    if row_num < 1 || row_num > size {
        return Err(NotationError::RowOutOfRange { size });
    }

    Ok(Coord::new(size - row_num, col))
}

/// Format `coord` on a board of `size`, e.g. "D4".
///
/// Coordinates off the board are formatted as their raw `(row, col)` pair.
pub fn str_coord(coord: Coord, size: usize) -> String {
    let labels = column_labels(size);
    match labels.get(coord.col) {
        Some(c) if coord.row < size => format!("{c}{}", size - coord.row),
        _ => coord.to_string(),
    }
}
