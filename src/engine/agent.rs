//! Move-choosing agents.

use super::{EngineError, Match, Move};
use crate::grid::Coord;

/// Picks the next move from the valid options offered by a rule set.
pub trait Agent {
    fn choose_move(&mut self, game: &Match, moves: &[Move]) -> Result<Move, EngineError>;
}

/// Picks any available move uniformly at random.
pub struct RandomAgent {
    rng: fastrand::Rng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    /// Agent seeded from the system.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible agent.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, _game: &Match, moves: &[Move]) -> Result<Move, EngineError> {
        if moves.is_empty() {
            return Err(EngineError::NoMoves);
        }
        Ok(moves[self.rng.usize(..moves.len())])
    }
}

/// Replays a preset sequence of coordinates.
///
/// Scripted coordinates that are not among the valid moves when their turn
/// comes are skipped. Once the script runs out the fallback agent, if any,
/// takes over.
pub struct ScriptedAgent {
    script: Vec<Coord>,
    next: usize,
    fallback: Option<Box<dyn Agent>>,
}

impl ScriptedAgent {
    pub fn new(script: Vec<Coord>) -> Self {
        Self {
            script,
            next: 0,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn Agent>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Scripted coordinates not yet consumed.
    pub fn remaining(&self) -> &[Coord] {
        &self.script[self.next..]
    }
}

impl Agent for ScriptedAgent {
    fn choose_move(&mut self, game: &Match, moves: &[Move]) -> Result<Move, EngineError> {
        while let Some(&coord) = self.script.get(self.next) {
            self.next += 1;
            if let Some(m) = moves.iter().find(|m| m.coord == coord) {
                return Ok(*m);
            }
        }
        match self.fallback.as_mut() {
            Some(fallback) => fallback.choose_move(game, moves),
            None => Err(EngineError::ScriptExhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Player;
    use crate::grid::{Color, Grid};

    fn game() -> Match {
        Match::new(
            Grid::new(3, 3),
            vec![
                Player::new("a", "X", Color::Black),
                Player::new("b", "O", Color::White),
            ],
        )
        .unwrap()
    }

    fn moves(coords: &[(usize, usize)]) -> Vec<Move> {
        coords
            .iter()
            .map(|&(r, c)| Move {
                stone: Color::Black,
                coord: Coord::new(r, c),
            })
            .collect()
    }

    #[test]
    fn test_random_agent_picks_a_valid_move() {
        let game = game();
        let options = moves(&[(0, 0), (1, 1), (2, 2)]);
        let mut agent = RandomAgent::with_seed(42);
        for _ in 0..20 {
            let m = agent.choose_move(&game, &options).unwrap();
            assert!(options.contains(&m));
        }
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let game = game();
        let options = moves(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
        let mut a = RandomAgent::with_seed(7);
        let mut b = RandomAgent::with_seed(7);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&game, &options).unwrap(),
                b.choose_move(&game, &options).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_without_moves() {
        let mut agent = RandomAgent::with_seed(1);
        assert_eq!(agent.choose_move(&game(), &[]), Err(EngineError::NoMoves));
    }

    #[test]
    fn test_scripted_agent_skips_invalid_entries() {
        let game = game();
        let mut agent = ScriptedAgent::new(vec![Coord::new(2, 2), Coord::new(0, 0)]);
        let options = moves(&[(0, 0), (1, 1)]);
        let m = agent.choose_move(&game, &options).unwrap();
        assert_eq!(m.coord, Coord::new(0, 0));
        assert!(agent.remaining().is_empty());
        assert_eq!(
            agent.choose_move(&game, &options),
            Err(EngineError::ScriptExhausted)
        );
    }

    #[test]
    fn test_scripted_agent_falls_back() {
        let game = game();
        let fallback = Box::new(RandomAgent::with_seed(3));
        let mut agent = ScriptedAgent::new(vec![Coord::new(1, 1)]).with_fallback(fallback);
        let options = moves(&[(1, 1), (2, 0)]);
        assert_eq!(
            agent.choose_move(&game, &options).unwrap().coord,
            Coord::new(1, 1)
        );
        let m = agent.choose_move(&game, &options).unwrap();
        assert!(options.contains(&m));
    }
}
