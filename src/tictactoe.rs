//! Tic-tac-toe on a square board (3x3 by default).
//!
//! Players alternate placing marks; a full row, column or diagonal of one
//! mark wins, and a full board without a winner is a draw.

use crate::constants::TICTACTOE_SIZE;
use crate::engine::{EngineError, Match, Move, Outcome, Player, Rules};
use crate::grid::{Color, Coord, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    pub size: usize,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Standard 3x3 rules.
    pub fn new() -> Self {
        Self {
            size: TICTACTOE_SIZE,
        }
    }

    /// Build a match for exactly two players.
    pub fn new_match(&self, players: Vec<Player>) -> Result<Match, EngineError> {
        if players.len() != 2 {
            return Err(EngineError::PlayerCount {
                expected: 2,
                got: players.len(),
            });
        }
        Match::new(Grid::new(self.size, self.size), players)
    }

    /// Every row, column and both diagonals.
    fn lines(&self) -> Vec<Vec<Coord>> {
        let n = self.size;
        let mut lines = Vec::with_capacity(n * 2 + 2);
        for r in 0..n {
            lines.push((0..n).map(|c| Coord::new(r, c)).collect());
        }
        for c in 0..n {
            lines.push((0..n).map(|r| Coord::new(r, c)).collect());
        }
        lines.push((0..n).map(|i| Coord::new(i, i)).collect());
        lines.push((0..n).map(|i| Coord::new(i, n - 1 - i)).collect());
        lines
    }

    /// Color that has aligned a full line, if any.
    pub fn find_winner(&self, grid: &Grid) -> Option<Color> {
        self.lines().into_iter().find_map(|line| {
            let first = grid.get(*line.first()?).ok().flatten()?;
            line.iter()
                .all(|&c| grid.get(c) == Ok(Some(first)))
                .then_some(first)
        })
    }
}

impl Rules for TicTacToe {
    fn valid_moves(&self, game: &Match) -> Vec<Move> {
        if game.is_over() {
            return Vec::new();
        }
        let stone = game.current_player().stone;
        game.grid
            .iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(coord, _)| Move { stone, coord })
            .collect()
    }

    fn apply_move(&self, game: &mut Match, m: Move) -> Result<(), EngineError> {
        game.record_move(m)?;
        if let Some(winner) = self.find_winner(&game.grid) {
            game.end(Outcome::Winner(winner));
        } else if game.grid.is_full() {
            game.end(Outcome::Draw);
        }
        Ok(())
    }

    fn status(&self, game: &Match) -> Option<Outcome> {
        if let Some(outcome) = game.outcome() {
            return Some(outcome);
        }
        if let Some(winner) = self.find_winner(&game.grid) {
            return Some(Outcome::Winner(winner));
        }
        game.grid.is_full().then_some(Outcome::Draw)
    }
}

/// Draw the board as `X | O | X` rows separated by dashes, using each
/// player's token.
pub fn render(game: &Match) -> String {
    let token = |cell: Option<Color>| -> String {
        match cell {
            None => " ".to_string(),
            Some(stone) => game
                .player(stone)
                .map(|p| p.token.clone())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| stone.glyph().to_string()),
        }
    };

    let cols = game.grid.cols();
    let rows = game.grid.rows();
    let mut out = String::new();
    for (coord, cell) in game.grid.iter() {
        out.push_str(&token(cell));
        if coord.col + 1 < cols {
            out.push_str(" | ");
        } else if coord.row + 1 < rows {
            out.push('\n');
            out.push_str(&"-".repeat(cols * 4 - 3));
            out.push('\n');
        }
    }
    out
}
