//! Text rendering of a stone-game session.

use std::fmt::Write;

use crate::constants::GLYPH_EMPTY;
use crate::grid::{Cell, Color};
use crate::notation::column_labels;
use crate::position::Position;

/// Draw the board with column letters above and below and row numbers
/// (counting down from `size` to 1) on both sides.
///
/// ```text
///    A B C D E
///  5 . . . . .  5
///  4 . X . . .  4
/// ```
pub fn render_board(pos: &Position) -> String {
    let size = pos.size();
    let mut labels = String::from("   ");
    for l in column_labels(size) {
        labels.push(l);
        labels.push(' ');
    }

    let mut out = String::with_capacity((size + 2) * (size * 2 + 8));
    out.push_str(&labels);
    out.push('\n');
    let cells: Vec<Cell> = pos.grid().iter().map(|(_, cell)| cell).collect();
    for (row, line) in cells.chunks(size.max(1)).enumerate() {
        let display_row = size - row;
        // Writing into a String cannot fail.
        let _ = write!(out, "{display_row:2} ");
        for &cell in line {
            out.push(cell.map_or(GLYPH_EMPTY, Color::glyph));
            out.push(' ');
        }
        let _ = writeln!(out, "{display_row:2}");
    }
    out.push_str(&labels);
    out
}

/// One-line summary of capture tallies and whose turn it is.
pub fn status_line(pos: &Position) -> String {
    let to_play = pos
        .to_play()
        .map_or_else(|| "nobody (finished)".to_string(), |c| c.to_string());
    format!(
        "Captures - Black: {}, White: {}. To play: {to_play}.",
        pos.captures(Color::Black),
        pos.captures(Color::White),
    )
}
