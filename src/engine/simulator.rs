//! Rule-set abstraction and the turn loop that drives it.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::{Agent, EngineError, Match, Move, Outcome};
use crate::constants::TURN_LIMIT_FACTOR;
use crate::grid::Color;

/// Game-specific logic for validating and applying moves.
pub trait Rules {
    /// Moves the current player may make.
    fn valid_moves(&self, game: &Match) -> Vec<Move>;

    /// Apply `m`, storing the outcome on `game` if the move ends the match.
    fn apply_move(&self, game: &mut Match, m: Move) -> Result<(), EngineError>;

    /// The outcome if the match is over, `None` while it continues.
    fn status(&self, game: &Match) -> Option<Outcome>;
}

/// Play `game` to completion, asking the agent seated for each color to pick
/// a move every turn.
///
/// A position with no valid moves is a draw. The loop is capped at
/// `rows * cols * 4 + players` turns; running into the cap records a draw and
/// returns `TurnLimitExceeded`.
pub fn simulate<R: Rules + ?Sized>(
    game: &mut Match,
    rules: &R,
    agents: &mut HashMap<Color, Box<dyn Agent>>,
) -> Result<Outcome, EngineError> {
    if agents.is_empty() {
        return Err(EngineError::NoAgent(game.current_player().stone));
    }

    let area = game.grid.rows() * game.grid.cols();
    let turn_limit = area * TURN_LIMIT_FACTOR + game.players().len();

    for turn in 0..turn_limit {
        if let Some(outcome) = rules.status(game) {
            game.end(outcome);
            info!(turn, ?outcome, "match finished");
            return Ok(outcome);
        }

        let valid = rules.valid_moves(game);
        if valid.is_empty() {
            game.end(Outcome::Draw);
            info!(turn, "no valid moves; draw");
            return Ok(Outcome::Draw);
        }

        let stone = game.current_player().stone;
        let agent = agents.get_mut(&stone).ok_or(EngineError::NoAgent(stone))?;
        let m = agent.choose_move(game, &valid)?;
        debug!(turn, %stone, coord = %m.coord, "agent chose move");

        rules.apply_move(game, m)?;
        game.advance_turn();
    }

    game.end(Outcome::Draw);
    warn!(turn_limit, "turn limit exceeded; forcing draw");
    Err(EngineError::TurnLimitExceeded)
}
