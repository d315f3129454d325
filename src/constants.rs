//! Constants for board dimensions, glyphs, and loop limits.
//!
//! # Default Board Size
//!
//! The size used when no `--size` is given is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```
//!
//! Sessions themselves take their size at runtime; the feature only picks
//! the default.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default stone-game board size (NxN).
#[cfg(feature = "board9x9")]
pub const DEFAULT_BOARD_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_BOARD_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Smallest board a stone-game session accepts.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board a stone-game session accepts: one column per letter
/// from 'A' to 'Z' without [`SKIPPED_COLUMN`].
pub const MAX_BOARD_SIZE: usize = 25;

/// Side length of the standard tic-tac-toe board.
pub const TICTACTOE_SIZE: usize = 3;

// =============================================================================
// Turn Limits
// =============================================================================

/// Consecutive passes that signal the end of a stone game.
pub const END_PASSES: u32 = 2;

/// The generic simulator allows `rows * cols * TURN_LIMIT_FACTOR + players` turns.
pub const TURN_LIMIT_FACTOR: usize = 4;

/// Random playouts stop after `size * size * PLAYOUT_LENGTH_FACTOR` moves.
pub const PLAYOUT_LENGTH_FACTOR: usize = 3;

// =============================================================================
// Notation and Display
// =============================================================================

/// Column letter left out of board labels (avoids confusion with 'J').
pub const SKIPPED_COLUMN: char = 'I';

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';
