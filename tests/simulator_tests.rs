//! Tic-tac-toe matches driven through the generic simulator.

use std::collections::HashMap;

use boardgame_rust::engine::{
    Agent, EngineError, Match, Outcome, Player, RandomAgent, ScriptedAgent, simulate,
};
use boardgame_rust::grid::{Color, Coord};
use boardgame_rust::tictactoe::{self, TicTacToe};

fn players() -> Vec<Player> {
    vec![
        Player::new("Player X", "X", Color::Black),
        Player::new("Player O", "O", Color::White),
    ]
}

fn script(coords: &[(usize, usize)]) -> ScriptedAgent {
    ScriptedAgent::new(coords.iter().map(|&(r, c)| Coord::new(r, c)).collect())
}

fn agents(x: impl Agent + 'static, o: impl Agent + 'static) -> HashMap<Color, Box<dyn Agent>> {
    let mut agents: HashMap<Color, Box<dyn Agent>> = HashMap::new();
    agents.insert(Color::Black, Box::new(x));
    agents.insert(Color::White, Box::new(o));
    agents
}

fn play_seeded(seed: u64) -> (Match, Result<Outcome, EngineError>) {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    let mut agents = agents(
        RandomAgent::with_seed(seed),
        RandomAgent::with_seed(seed.wrapping_add(1)),
    );
    let result = simulate(&mut game, &rules, &mut agents);
    (game, result)
}

#[test]
fn test_scripted_row_win() {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    let mut agents = agents(
        script(&[(0, 0), (0, 1), (0, 2)]),
        script(&[(1, 0), (1, 1), (2, 2)]),
    );
    let outcome = simulate(&mut game, &rules, &mut agents).unwrap();
    assert_eq!(outcome, Outcome::Winner(Color::Black));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
    assert_eq!(game.log().len(), 5);
    assert!(tictactoe::render(&game).starts_with("X | X | X\n"));
}

#[test]
fn test_scripted_agent_skips_taken_cells() {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    // O's first choice is already taken by X.
    let mut agents = agents(
        script(&[(1, 1), (0, 0), (2, 2)]),
        script(&[(1, 1), (0, 2), (2, 0)]),
    );
    let outcome = simulate(&mut game, &rules, &mut agents).unwrap();
    assert_eq!(outcome, Outcome::Winner(Color::Black));
    assert_eq!(game.log()[1].coord, Coord::new(0, 2));
}

#[test]
fn test_script_exhausted_without_fallback() {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    let mut agents = agents(script(&[(0, 0)]), RandomAgent::with_seed(3));
    assert_eq!(
        simulate(&mut game, &rules, &mut agents),
        Err(EngineError::ScriptExhausted)
    );
    assert_eq!(game.log().len(), 2);
}

#[test]
fn test_scripted_opening_with_random_fallback() {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    let x = script(&[(1, 1)]).with_fallback(Box::new(RandomAgent::with_seed(11)));
    let mut agents = agents(x, RandomAgent::with_seed(12));
    simulate(&mut game, &rules, &mut agents).unwrap();
    assert_eq!(game.log()[0].coord, Coord::new(1, 1));
    assert!(game.is_over());
}

#[test]
fn test_missing_agent() {
    let rules = TicTacToe::new();
    let mut game = rules.new_match(players()).unwrap();
    let mut agents: HashMap<Color, Box<dyn Agent>> = HashMap::new();
    agents.insert(Color::Black, Box::new(RandomAgent::with_seed(1)));
    assert_eq!(
        simulate(&mut game, &rules, &mut agents),
        Err(EngineError::NoAgent(Color::White))
    );
}

#[test]
fn test_wrong_player_count() {
    let rules = TicTacToe::new();
    let result = rules.new_match(vec![Player::new("Solo", "X", Color::Black)]);
    assert!(matches!(
        result,
        Err(EngineError::PlayerCount {
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn test_random_games_reach_consistent_outcomes() {
    let rules = TicTacToe::new();
    for seed in 0..50 {
        let (game, result) = play_seeded(seed);
        let outcome = result.unwrap();
        assert!(game.log().len() <= 9);
        match outcome {
            Outcome::Winner(stone) => {
                assert_eq!(rules.find_winner(&game.grid), Some(stone));
                // The winner made the last move.
                assert_eq!(game.log().last().map(|m| m.stone), Some(stone));
            }
            Outcome::Draw => {
                assert!(game.grid.is_full());
                assert_eq!(rules.find_winner(&game.grid), None);
            }
        }
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    for seed in [1, 42, 1234] {
        let (a, ra) = play_seeded(seed);
        let (b, rb) = play_seeded(seed);
        assert_eq!(ra, rb);
        assert_eq!(a.log(), b.log());
    }
}
