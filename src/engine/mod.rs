//! Generic turn-based match state shared by rule sets driven through
//! [`simulate`].
//!
//! A [`Match`] owns the grid, the seated players, the move log and the final
//! outcome. Rule sets implement [`Rules`] on top of it; agents implement
//! [`Agent`] to pick from the moves a rule set offers.

pub mod agent;
pub mod simulator;

pub use agent::{Agent, RandomAgent, ScriptedAgent};
pub use simulator::{Rules, simulate};

use thiserror::Error;

use crate::error::RuleError;
use crate::grid::{Color, Coord, Grid};

/// A participant. Each player owns one stone color on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Short symbol for display, e.g. "X"
    pub token: String,
    pub stone: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, token: impl Into<String>, stone: Color) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            stone,
        }
    }
}

/// A placement by the player owning `stone`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub stone: Color,
    pub coord: Coord,
}

/// Result of a completed match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("at least one player required")]
    NoPlayers,
    #[error("duplicate player stone {0}")]
    DuplicatePlayer(Color),
    #[error("wrong number of players: expected {expected}, got {got}")]
    PlayerCount { expected: usize, got: usize },
    #[error("not {0}'s turn")]
    NotYourTurn(Color),
    #[error("no agent registered for {0}")]
    NoAgent(Color),
    #[error("no moves to choose from")]
    NoMoves,
    #[error("no scripted moves left and no fallback provided")]
    ScriptExhausted,
    #[error("turn limit exceeded; forcing draw")]
    TurnLimitExceeded,
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Shared state for one match.
#[derive(Clone, Debug)]
pub struct Match {
    pub grid: Grid,
    players: Vec<Player>,
    current: usize,
    log: Vec<Move>,
    outcome: Option<Outcome>,
}

impl Match {
    /// Seat `players` at `grid`; the first player moves first.
    ///
    /// # Errors
    /// `NoPlayers` for an empty list, `DuplicatePlayer` if two players share a stone.
    pub fn new(grid: Grid, players: Vec<Player>) -> Result<Self, EngineError> {
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        for (i, p) in players.iter().enumerate() {
            if players[..i].iter().any(|q| q.stone == p.stone) {
                return Err(EngineError::DuplicatePlayer(p.stone));
            }
        }
        Ok(Self {
            grid,
            players,
            current: 0,
            log: Vec::new(),
            outcome: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Player owning `stone`, if seated.
    pub fn player(&self, stone: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.stone == stone)
    }

    /// Hand the turn to the next player. Does nothing once an outcome is set.
    pub fn advance_turn(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.current = (self.current + 1) % self.players.len();
    }

    /// Place the move on the grid and append it to the log.
    ///
    /// # Errors
    /// `NotYourTurn` if `m` is not for the current player; grid errors otherwise.
    pub fn record_move(&mut self, m: Move) -> Result<(), EngineError> {
        if m.stone != self.current_player().stone {
            return Err(EngineError::NotYourTurn(m.stone));
        }
        self.grid.set_if_empty(m.coord, m.stone)?;
        self.log.push(m);
        Ok(())
    }

    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// Store the final outcome.
    pub fn end(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_players() -> Vec<Player> {
        vec![
            Player::new("Alice", "X", Color::Black),
            Player::new("Bob", "O", Color::White),
        ]
    }

    #[test]
    fn test_new_match_validates_players() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            Match::new(grid.clone(), Vec::new()).unwrap_err(),
            EngineError::NoPlayers
        );
        let dup = vec![
            Player::new("a", "X", Color::Black),
            Player::new("b", "Y", Color::Black),
        ];
        assert_eq!(
            Match::new(grid, dup).unwrap_err(),
            EngineError::DuplicatePlayer(Color::Black)
        );
    }

    #[test]
    fn test_turns_rotate() {
        let mut m = Match::new(Grid::new(3, 3), two_players()).unwrap();
        assert_eq!(m.current_player().name, "Alice");
        m.advance_turn();
        assert_eq!(m.current_player().name, "Bob");
        m.advance_turn();
        assert_eq!(m.current_player().name, "Alice");
    }

    #[test]
    fn test_advance_turn_stops_after_outcome() {
        let mut m = Match::new(Grid::new(3, 3), two_players()).unwrap();
        m.end(Outcome::Draw);
        m.advance_turn();
        assert_eq!(m.current_player().name, "Alice");
        assert!(m.is_over());
    }

    #[test]
    fn test_record_move() {
        let mut m = Match::new(Grid::new(3, 3), two_players()).unwrap();
        let mv = Move {
            stone: Color::Black,
            coord: Coord::new(1, 1),
        };
        m.record_move(mv).unwrap();
        assert_eq!(m.log(), &[mv]);
        assert_eq!(m.grid.get(Coord::new(1, 1)), Ok(Some(Color::Black)));
    }

    #[test]
    fn test_record_move_checks_turn_and_cell() {
        let mut m = Match::new(Grid::new(3, 3), two_players()).unwrap();
        let wrong_turn = Move {
            stone: Color::White,
            coord: Coord::new(0, 0),
        };
        assert_eq!(
            m.record_move(wrong_turn),
            Err(EngineError::NotYourTurn(Color::White))
        );

        let mv = Move {
            stone: Color::Black,
            coord: Coord::new(0, 0),
        };
        m.record_move(mv).unwrap();
        assert_eq!(
            m.record_move(mv),
            Err(EngineError::Rule(RuleError::AlreadyOccupied(Coord::new(0, 0))))
        );
        assert_eq!(m.log().len(), 1);
    }
}
