//! Position signatures and the repetition history.
//!
//! A signature identifies a (board contents, side to move) pair. It is a
//! SHA-256 digest over the side-to-move byte, the grid dimensions, and one
//! byte per cell in row-major order, so two positions share a signature
//! exactly when they are the same position.
//!
//! The history keeps every signature seen in a session and is never pruned.
//! One 32-byte entry per move is an accepted cost for boards of this size.

use std::collections::HashSet;
use std::fmt;

use sha2::{Digest, Sha256};

use crate::grid::{Cell, Color, Grid};

/// Fixed-width identity of a position.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Signature([u8; 32]);

fn cell_byte(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(Color::Black) => 1,
        Some(Color::White) => 2,
    }
}

impl Signature {
    /// Signature of `grid` with `to_play` to move next (`None` once finished).
    pub fn of(grid: &Grid, to_play: Option<Color>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update([to_play.map_or(0, |c| cell_byte(Some(c)))]);
        hasher.update((grid.rows() as u64).to_le_bytes());
        hasher.update((grid.cols() as u64).to_le_bytes());
        let cells: Vec<u8> = grid.iter().map(|(_, cell)| cell_byte(cell)).collect();
        hasher.update(&cells);
        Self(hasher.finalize().into())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 bytes are plenty to tell entries apart in logs.
        write!(f, "Signature(")?;
        for b in &self.0[..8] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "..)")
    }
}

/// Every position signature a session has passed through.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    seen: HashSet<Signature>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sig: &Signature) -> bool {
        self.seen.contains(sig)
    }

    /// Record `sig`. Returns false if it was already present.
    pub fn insert(&mut self, sig: Signature) -> bool {
        self.seen.insert(sig)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
