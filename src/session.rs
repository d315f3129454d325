//! Interactive text session for the stone game.
//!
//! Reads one command per line and answers on the output stream:
//!
//! - `<coord>` (e.g. `D4`) - place a stone for the side to move
//! - `pass` - pass; two passes in a row end the game
//! - `board` - print the board again
//! - `help` - list commands
//! - `quit`, `q`, `exit` - leave
//!
//! Rejected moves print `Invalid move: <reason>` and the loop continues.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::notation::parse_coord;
use crate::position::Position;
use crate::render::{render_board, status_line};

const HELP: &str = "Commands: coordinate to play, 'pass' to pass, 'board' to show the board, 'quit' to exit.";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Continue(String),
    /// Print the message and stop
    Stop(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(m) | Reply::Stop(m) => m,
        }
    }
}

pub struct GoSession {
    pos: Position,
}

impl GoSession {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Greeting, help line and the empty board.
    pub fn banner(&self) -> String {
        let size = self.pos.size();
        format!(
            "Go game on {size}x{size} board. Coordinates like D4, row numbers from bottom.\n{HELP}\n{}",
            self.board()
        )
    }

    fn board(&self) -> String {
        format!("{}\n{}", render_board(&self.pos), status_line(&self.pos))
    }

    /// Input prompt for the next move.
    pub fn prompt(&self) -> String {
        match self.pos.to_play() {
            Some(color) => format!("Move {} - {color} to play: ", self.pos.move_number() + 1),
            None => "Game over: ".to_string(),
        }
    }

    /// Run the loop until `quit`, two passes, or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.banner()).context("writing banner")?;

        let mut lines = input.lines();
        loop {
            write!(output, "\n{}", self.prompt()).context("writing prompt")?;
            output.flush().context("flushing output")?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("reading command")?;

            let reply = self.execute(&line);
            writeln!(output, "{}", reply.message()).context("writing reply")?;
            if let Reply::Stop(_) = reply {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "" => Reply::Continue(String::new()),
            "q" | "quit" | "exit" => Reply::Stop("Exiting.".to_string()),
            "help" => Reply::Continue(HELP.to_string()),
            "board" => Reply::Continue(self.board()),
            "pass" => match self.pos.pass() {
                Ok(()) if self.pos.passes_ended() => {
                    self.pos.finish();
                    info!(moves = self.pos.move_number(), "game ended by passes");
                    Reply::Stop(format!(
                        "Player passed.\nBoth players passed. Game over.\n{}",
                        self.board()
                    ))
                }
                Ok(()) => Reply::Continue(format!("Player passed.\n{}", self.board())),
                Err(e) => Reply::Continue(format!("Invalid move: {e}")),
            },
            _ => {
                let coord = match parse_coord(&input, self.pos.size()) {
                    Ok(c) => c,
                    Err(e) => return Reply::Continue(format!("Invalid move: {e}")),
                };
                match self.pos.play(coord) {
                    Ok(result) if result.captured > 0 => Reply::Continue(format!(
                        "Captured {} stones.\n{}",
                        result.captured,
                        self.board()
                    )),
                    Ok(_) => Reply::Continue(self.board()),
                    Err(e) => Reply::Continue(format!("Invalid move: {e}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Color, Coord};

    fn session() -> GoSession {
        GoSession::new(Position::new(5).unwrap())
    }

    #[test]
    fn test_play_coordinate() {
        let mut s = session();
        let reply = s.execute("C3");
        assert!(matches!(reply, Reply::Continue(_)));
        assert_eq!(
            s.position().stone_at(Coord::new(2, 2)),
            Ok(Some(Color::Black))
        );
        assert!(reply.message().contains("To play: White."));
    }

    #[test]
    fn test_invalid_input_keeps_going() {
        let mut s = session();
        assert_eq!(
            s.execute("Z9"),
            Reply::Continue("Invalid move: invalid column 'Z'".to_string())
        );
        s.execute("a1");
        assert_eq!(
            s.execute("A1"),
            Reply::Continue("Invalid move: cell already occupied at (4, 0)".to_string())
        );
        assert_eq!(s.position().move_number(), 1);
    }

    #[test]
    fn test_two_passes_end_the_game() {
        let mut s = session();
        assert!(matches!(s.execute("pass"), Reply::Continue(_)));
        let reply = s.execute("PASS");
        assert!(matches!(reply, Reply::Stop(_)));
        assert!(reply.message().contains("Game over"));
        assert!(s.position().is_finished());
    }

    #[test]
    fn test_quit() {
        let mut s = session();
        assert_eq!(s.execute(" quit "), Reply::Stop("Exiting.".to_string()));
        assert_eq!(s.execute("q"), Reply::Stop("Exiting.".to_string()));
    }

    #[test]
    fn test_capture_message() {
        let mut s = session();
        for cmd in ["B1", "A1", "C2", "E5"] {
            s.execute(cmd);
        }
        let reply = s.execute("A2");
        assert!(reply.message().starts_with("Captured 1 stones."));
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut s = session();
        let input = b"C3\nD4\nbogus\nquit\nE5\n" as &[u8];
        let mut output = Vec::new();
        s.run(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Go game on 5x5 board."));
        assert!(text.contains("Move 3 - Black to play: "));
        assert!(text.contains("Invalid move:"));
        assert!(text.ends_with("Exiting.\n"));
        assert_eq!(s.position().move_number(), 2);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut s = session();
        let mut output = Vec::new();
        s.run(b"pass\n" as &[u8], &mut output).unwrap();
        assert_eq!(s.position().consecutive_passes(), 1);
        assert!(!s.position().is_finished());
    }
}
