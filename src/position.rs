//! Stone-game session: board state, move legality, and captures.
//!
//! Every placement goes through the same clone-validate-commit cycle:
//! - the current grid is cloned into a scratch copy and the stone written there
//! - opponent groups left without liberties are removed from the scratch grid
//! - the placed stone's own group must still have a liberty (no suicide)
//! - the resulting (board, side to move) pair must be new (positional superko)
//!
//! Only when all of that succeeds does the scratch grid replace the live one,
//! together with the turn, counters, and history. Any failure drops the
//! scratch grid, so a rejected move never leaves partial changes behind.
//!
//! The session does not decide when the game is over. It exposes the
//! consecutive-pass counter and a caller-applied [`Position::finish`].

use tracing::{debug, trace};

use crate::constants::{END_PASSES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::RuleError;
use crate::grid::{Cell, Color, Coord, Grid};
use crate::group::resolve_group;
use crate::history::{PositionHistory, Signature};

/// Outcome of an accepted placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// Opponent stones removed by the placement
    pub captured: usize,
}

/// A placement that passed every check but has not been committed.
struct Candidate {
    grid: Grid,
    captured: usize,
    signature: Signature,
}

/// A stone-game session on a square board.
#[derive(Clone, Debug)]
pub struct Position {
    grid: Grid,
    size: usize,
    /// Side to move; `None` once the session is finished
    to_play: Option<Color>,
    /// Stones captured by Black and White
    captures: [usize; 2],
    consecutive_passes: u32,
    /// Moves played, passes included
    move_number: usize,
    history: PositionHistory,
}

impl Position {
    /// Start a session on an empty `size` x `size` board with Black to move.
    ///
    /// # Errors
    /// - `BoardTooSmall` if `size` is below [`MIN_BOARD_SIZE`]
    /// - `BoardTooLarge` if `size` is above [`MAX_BOARD_SIZE`]
    pub fn new(size: usize) -> Result<Self, RuleError> {
        if size < MIN_BOARD_SIZE {
            return Err(RuleError::BoardTooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(RuleError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::new_unchecked(size))
    }

    /// Start a session without the minimum-size check.
    ///
    /// Intended for analysing small tactical shapes (3x3 corners and the
    /// like); regular games should go through [`Position::new`].
    pub fn new_unchecked(size: usize) -> Self {
        let grid = Grid::new(size, size);
        let to_play = Some(Color::Black);
        let mut history = PositionHistory::new();
        history.insert(Signature::of(&grid, to_play));
        Self {
            grid,
            size,
            to_play,
            captures: [0, 0],
            consecutive_passes: 0,
            move_number: 0,
            history,
        }
    }

    /// Place a stone for the side to move.
    ///
    /// Returns the number of opponent stones captured.
    ///
    /// # Errors
    /// - `GameFinished` if the session has no side to move
    /// - `OutOfBounds` if `coord` is off the board
    /// - `AlreadyOccupied` if the point holds a stone
    /// - `SuicideRejected` if the stone's group has no liberty after captures
    /// - `SuperkoRejected` if the resulting position was seen before
    pub fn play(&mut self, coord: Coord) -> Result<MoveResult, RuleError> {
        let mover = self.to_play.ok_or(RuleError::GameFinished)?;
        let candidate = match self.evaluate(mover, coord) {
            Ok(c) => c,
            Err(e) => {
                debug!(%coord, color = %mover, error = %e, "move rejected");
                return Err(e);
            }
        };

        self.grid = candidate.grid;
        self.to_play = Some(mover.opponent());
        self.history.insert(candidate.signature);
        self.move_number += 1;
        self.consecutive_passes = 0;
        if candidate.captured > 0 {
            self.captures[mover.index()] += candidate.captured;
            debug!(%coord, color = %mover, captured = candidate.captured, "stones captured");
        }
        trace!(move_number = self.move_number, signature = ?candidate.signature, "move committed");

        Ok(MoveResult {
            captured: candidate.captured,
        })
    }

    /// Whether the side to move may place a stone at `coord`.
    ///
    /// Runs the full check (captures, suicide, superko) on a scratch copy
    /// and leaves the session untouched.
    pub fn is_legal(&self, coord: Coord) -> bool {
        self.to_play
            .is_some_and(|mover| self.evaluate(mover, coord).is_ok())
    }

    /// Build the post-move grid for `mover` at `coord` and validate it.
    fn evaluate(&self, mover: Color, coord: Coord) -> Result<Candidate, RuleError> {
        if !self.grid.contains(coord) {
            return Err(RuleError::OutOfBounds(coord));
        }

        let mut scratch = self.grid.clone();
        scratch.set_if_empty(coord, mover)?;

        let opponent = mover.opponent();
        let mut captured = 0;
        for n in scratch.neighbors(coord) {
            // Two neighbors can share a group; the second one is already
            // cleared once that group is captured.
            if scratch.get(n)? != Some(opponent) {
                continue;
            }
            let group = resolve_group(&scratch, n)?;
            if group.is_dead() {
                for &stone in &group.stones {
                    scratch.force_set(stone, None)?;
                }
                captured += group.stones.len();
            }
        }

        if resolve_group(&scratch, coord)?.is_dead() {
            return Err(RuleError::SuicideRejected);
        }

        let signature = Signature::of(&scratch, Some(opponent));
        if self.history.contains(&signature) {
            return Err(RuleError::SuperkoRejected);
        }

        Ok(Candidate {
            grid: scratch,
            captured,
            signature,
        })
    }

    /// Pass the turn without placing a stone.
    ///
    /// # Errors
    /// `GameFinished` if the session has no side to move.
    pub fn pass(&mut self) -> Result<(), RuleError> {
        let mover = self.to_play.ok_or(RuleError::GameFinished)?;
        self.move_number += 1;
        self.consecutive_passes += 1;
        self.to_play = Some(mover.opponent());
        self.history.insert(Signature::of(&self.grid, self.to_play));
        trace!(move_number = self.move_number, passes = self.consecutive_passes, "pass");
        Ok(())
    }

    /// Mark the session finished. Further moves and passes fail with
    /// `GameFinished`.
    pub fn finish(&mut self) {
        self.to_play = None;
    }

    /// Whether enough consecutive passes were played to end the game.
    /// The session keeps accepting moves until [`Position::finish`] is called.
    pub fn passes_ended(&self) -> bool {
        self.consecutive_passes >= END_PASSES
    }

    pub fn to_play(&self) -> Option<Color> {
        self.to_play
    }

    pub fn is_finished(&self) -> bool {
        self.to_play.is_none()
    }

    /// Stones captured so far by `color`.
    pub fn captures(&self, color: Color) -> usize {
        self.captures[color.index()]
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupant of `coord`.
    pub fn stone_at(&self, coord: Coord) -> Result<Cell, RuleError> {
        self.grid.get(coord)
    }

    /// Number of distinct positions seen, the starting one included.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
