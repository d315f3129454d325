//! Random playouts on a stone-game session.
//!
//! A playout plays uniformly random legal moves until both sides pass in a
//! row or a length limit is hit. Only the cell actually chosen is validated:
//! candidates are shuffled and tried one by one with [`Position::is_legal`],
//! so a turn never needs the full list of legal moves.

use tracing::debug;

use crate::constants::{END_PASSES, PLAYOUT_LENGTH_FACTOR};
use crate::error::RuleError;
use crate::grid::{Color, Coord};
use crate::position::Position;

/// Summary of a finished playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayoutReport {
    /// Stones placed
    pub moves: usize,
    /// Passes played
    pub passes: usize,
    /// Stones captured by [Black, White]
    pub captures: [usize; 2],
}

/// Default playout length for a board of `size`.
pub fn default_max_moves(size: usize) -> usize {
    size * size * PLAYOUT_LENGTH_FACTOR
}

/// Play random moves on `pos` until two consecutive passes or `max_moves`
/// turns (passes included).
///
/// # Errors
/// `GameFinished` if `pos` is already finished.
pub fn random_playout(
    pos: &mut Position,
    rng: &mut fastrand::Rng,
    max_moves: usize,
) -> Result<PlayoutReport, RuleError> {
    if pos.is_finished() {
        return Err(RuleError::GameFinished);
    }
    let mut report = PlayoutReport::default();

    for _ in 0..max_moves {
        if pos.consecutive_passes() >= END_PASSES {
            break;
        }
        let mover = pos.to_play().ok_or(RuleError::GameFinished)?;
        match choose_random_move(pos, rng) {
            Some(pt) => {
                let result = pos.play(pt)?;
                report.moves += 1;
                report.captures[mover.index()] += result.captured;
            }
            None => {
                pos.pass()?;
                report.passes += 1;
            }
        }
    }

    debug!(
        moves = report.moves,
        passes = report.passes,
        black_captures = report.captures[0],
        white_captures = report.captures[1],
        "playout finished"
    );
    Ok(report)
}

/// Pick a random legal move for the side to move, or `None` if there is none.
///
/// Moves that would fill one of the mover's own single-point eyes are
/// skipped, otherwise playouts on small boards would rarely end by passing.
fn choose_random_move(pos: &Position, rng: &mut fastrand::Rng) -> Option<Coord> {
    let mover = pos.to_play()?;
    let grid = pos.grid();
    let cells: Vec<Coord> = grid.iter().map(|(coord, _)| coord).collect();
    if cells.is_empty() {
        return None;
    }

    // Start from a random index, then wrap around.
    let start = rng.usize(..cells.len());
    let mut candidates: Vec<Coord> = cells[start..]
        .iter()
        .chain(&cells[..start])
        .copied()
        .filter(|&pt| grid.get(pt) == Ok(None) && !is_own_eye(pos, pt, mover))
        .collect();

    // Partial Fisher-Yates: try candidates in random order until one is legal.
    let n = candidates.len();
    for i in 0..n {
        let j = i + rng.usize(..n - i);
        candidates.swap(i, j);
        if pos.is_legal(candidates[i]) {
            return Some(candidates[i]);
        }
    }
    None
}

/// Whether every on-board neighbor of the empty point `pt` is a `color` stone.
fn is_own_eye(pos: &Position, pt: Coord, color: Color) -> bool {
    let grid = pos.grid();
    grid.neighbors(pt).all(|n| grid.get(n) == Ok(Some(color)))
}
