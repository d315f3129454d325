//! Rectangular cell store shared by every game in the crate.
//!
//! The grid knows nothing about game rules: it maps each in-range
//! coordinate to an occupant (`None` for empty, `Some(Color)` for a stone)
//! and rejects anything outside `[0, rows) x [0, cols)`.

use std::fmt;

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};
use crate::error::RuleError;

/// Stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Display glyph: 'X' for Black, 'O' for White.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Occupant of a single cell.
pub type Cell = Option<Color>;

/// Zero-based (row, column). Row 0 is the top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn idx(&self, coord: Coord) -> Result<usize, RuleError> {
        if !self.contains(coord) {
            return Err(RuleError::OutOfBounds(coord));
        }
        Ok(coord.row * self.cols + coord.col)
    }

    /// Occupant at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Cell, RuleError> {
        let i = self.idx(coord)?;
        Ok(self.cells[i])
    }

    /// Place `color` at `coord`, which must be empty.
    pub fn set_if_empty(&mut self, coord: Coord, color: Color) -> Result<(), RuleError> {
        let i = self.idx(coord)?;
        if self.cells[i].is_some() {
            return Err(RuleError::AlreadyOccupied(coord));
        }
        self.cells[i] = Some(color);
        Ok(())
    }

    /// Write `cell` regardless of the current occupant. Used to clear captures.
    pub fn force_set(&mut self, coord: Coord, cell: Cell) -> Result<(), RuleError> {
        let i = self.idx(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Whether every cell holds a stone.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / cols, i % cols), cell))
    }

    /// Visit every cell in row-major order.
    pub fn for_each<F: FnMut(Coord, Cell)>(&self, mut f: F) {
        for (coord, cell) in self.iter() {
            f(coord, cell);
        }
    }

    /// In-bounds orthogonal neighbors of `coord`, in N, S, W, E order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        let Coord { row, col } = coord;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.rows {
            v.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            v.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.cols {
            v.push(Coord::new(row, col + 1));
        }
        v.into_iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                let ch = cell.map_or(GLYPH_EMPTY, Color::glyph);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
