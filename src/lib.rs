//! Boardgame-Rust: rule engines for small abstract board games.
//!
//! The centre of the crate is a stone-capture game (Go without scoring):
//! connected groups, liberties, captures, suicide rejection and positional
//! superko, all checked on a scratch copy of the board before anything is
//! committed. Around it sit a generic turn loop with pluggable agents and a
//! tic-tac-toe rule set that runs on that loop.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, glyphs, loop limits
//! - [`grid`] - Bounds-checked cell store
//! - [`group`] - Group and liberty resolution
//! - [`history`] - Position signatures for repetition checks
//! - [`position`] - Stone-game session (moves, captures, passes)
//! - [`notation`] - "D4"-style coordinates
//! - [`render`] - Text board
//! - [`playout`] - Random stone-game playouts
//! - [`session`] - Interactive stone-game loop
//! - [`engine`] - Generic match state, rules trait, simulator, agents
//! - [`tictactoe`] - Line-alignment game on the generic engine
//!
//! ## Example
//!
//! ```
//! use boardgame_rust::notation::parse_coord;
//! use boardgame_rust::position::Position;
//! use boardgame_rust::render::render_board;
//!
//! let mut pos = Position::new(9).unwrap();
//! pos.play(parse_coord("D4", 9).unwrap()).unwrap();
//! pos.pass().unwrap();
//! println!("{}", render_board(&pos));
//! ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod group;
pub mod history;
pub mod notation;
pub mod playout;
pub mod position;
pub mod render;
pub mod session;
pub mod tictactoe;

pub use error::RuleError;
pub use grid::{Color, Coord, Grid};
pub use position::{MoveResult, Position};
