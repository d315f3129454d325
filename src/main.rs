//! Boardgame-Rust command line.
//!
//! ## Usage
//!
//! - `boardgame-rust` - Show a demo
//! - `boardgame-rust go --size 9` - Play the stone game interactively
//! - `boardgame-rust tictactoe --games 10` - Simulate tic-tac-toe between agents
//! - `boardgame-rust playout --size 9` - Random stone-game playout

use std::collections::HashMap;
use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boardgame_rust::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use boardgame_rust::engine::{Agent, Outcome, Player, RandomAgent, ScriptedAgent, simulate};
use boardgame_rust::grid::{Color, Coord};
use boardgame_rust::notation::parse_coord;
use boardgame_rust::playout::{default_max_moves, random_playout};
use boardgame_rust::position::Position;
use boardgame_rust::render::{render_board, status_line};
use boardgame_rust::session::GoSession;
use boardgame_rust::tictactoe::{self, TicTacToe};

/// Boardgame-Rust: rule engines for small abstract board games
#[derive(Parser)]
#[command(name = "boardgame-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the stone game interactively on stdin/stdout
    Go {
        /// Board size (commonly 9, 13, or 19)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
        size: usize,
    },
    /// Simulate tic-tac-toe games between agents
    Tictactoe {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
        /// Seed for the random agents
        #[arg(long)]
        seed: Option<u64>,
        /// Scripted opening for X, e.g. "B2,A1"; random moves after that
        #[arg(long, value_delimiter = ',')]
        script: Vec<String>,
    },
    /// Play a random stone-game playout and print the final board
    Playout {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a short demo of both games
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Go { size }) => run_go(size),
        Some(Commands::Tictactoe {
            games,
            seed,
            script,
        }) => run_tictactoe(games, seed, &script),
        Some(Commands::Playout { size, seed }) => run_playout(size, seed),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_go(size: usize) -> Result<()> {
    let pos = Position::new(size).context("cannot start game")?;
    let mut session = GoSession::new(pos);
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn rng_for(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

fn random_agent(rng: &mut fastrand::Rng) -> RandomAgent {
    RandomAgent::with_seed(rng.u64(..))
}

fn run_tictactoe(games: usize, seed: Option<u64>, script: &[String]) -> Result<()> {
    let rules = TicTacToe::new();
    let opening: Vec<Coord> = script
        .iter()
        .map(|s| {
            parse_coord(s, rules.size).with_context(|| format!("bad script entry {s:?}"))
        })
        .collect::<Result<_>>()?;

    let mut rng = rng_for(seed);
    let mut tally: HashMap<Option<Color>, usize> = HashMap::new();

    for n in 1..=games {
        let players = vec![
            Player::new("Player X", "X", Color::Black),
            Player::new("Player O", "O", Color::White),
        ];
        let mut game = rules.new_match(players)?;

        let fallback = Box::new(random_agent(&mut rng));
        let x_agent = ScriptedAgent::new(opening.clone()).with_fallback(fallback);
        let mut agents: HashMap<Color, Box<dyn Agent>> = HashMap::new();
        agents.insert(Color::Black, Box::new(x_agent));
        agents.insert(Color::White, Box::new(random_agent(&mut rng)));

        let outcome = simulate(&mut game, &rules, &mut agents)
            .with_context(|| format!("game {n} failed"))?;

        println!("Game {n}:\n{}", tictactoe::render(&game));
        match outcome {
            Outcome::Winner(stone) => {
                let name = game.player(stone).map_or("?", |p| p.name.as_str());
                println!("Winner: {name}\n");
                *tally.entry(Some(stone)).or_default() += 1;
            }
            Outcome::Draw => {
                println!("Draw\n");
                *tally.entry(None).or_default() += 1;
            }
        }
    }

    if games > 1 {
        println!(
            "X wins: {}, O wins: {}, draws: {}",
            tally.get(&Some(Color::Black)).copied().unwrap_or(0),
            tally.get(&Some(Color::White)).copied().unwrap_or(0),
            tally.get(&None).copied().unwrap_or(0),
        );
    }
    Ok(())
}

fn run_playout(size: usize, seed: Option<u64>) -> Result<()> {
    let mut pos = Position::new(size).context("cannot start game")?;
    let mut rng = rng_for(seed);
    let report = random_playout(&mut pos, &mut rng, default_max_moves(size))?;
    println!("{}", render_board(&pos));
    println!("{}", status_line(&pos));
    println!(
        "Stones played: {}, passes: {}, positions seen: {}",
        report.moves,
        report.passes,
        pos.history_len()
    );
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Boardgame-Rust: rule engines for small board games\n");

    println!("=== Stone Game Demo ===");
    let mut pos = Position::new(5)?;
    for mv in ["B1", "A1", "C3", "E5", "A2"] {
        let result = pos.play(parse_coord(mv, 5)?)?;
        if result.captured > 0 {
            println!("{mv} captured {} stone(s)", result.captured);
        }
    }
    println!("{}", render_board(&pos));
    println!("{}\n", status_line(&pos));

    println!("=== Tic-Tac-Toe Demo ===");
    run_tictactoe(1, Some(7), &[])
}
