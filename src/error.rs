//! Error values produced by the grid and the stone-game rules.

use thiserror::Error;

use crate::grid::Coord;

/// A caller-input or rule violation. None of these are fatal: a rejected
/// operation leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Coordinate outside the grid
    #[error("position out of bounds: {0}")]
    OutOfBounds(Coord),
    /// Target cell already holds a stone
    #[error("cell already occupied at {0}")]
    AlreadyOccupied(Coord),
    /// Group resolution started on an empty cell
    #[error("no stone at {0}")]
    EmptyStart(Coord),
    /// Placement leaves its own group without liberties after captures
    #[error("suicide is not allowed")]
    SuicideRejected,
    /// Placement recreates an earlier (board, side to move) pair
    #[error("move violates superko (repeats a previous position)")]
    SuperkoRejected,
    /// The session has no side to move
    #[error("game is finished")]
    GameFinished,
    /// Session construction below the minimum playable size
    #[error("board size must be at least {min} (got {size})")]
    BoardTooSmall { size: usize, min: usize },
    /// Session construction beyond the labelled column range
    #[error("board size must be at most {max} (got {size})")]
    BoardTooLarge { size: usize, max: usize },
}
