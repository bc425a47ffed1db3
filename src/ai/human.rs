use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use super::agent::Agent;
use crate::error::AgentError;
use crate::game::{Board, Player, COLS};

/// Reads columns typed as 1-7 and re-prompts until a playable one arrives.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout and read from stdin.
    pub fn stdio() -> Self {
        // Both seats may read the same stdin. A private buffer larger than a
        // byte would pull the other seat's queued lines out of piped input.
        HumanAgent {
            input: BufReader::with_capacity(1, io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    /// Consume the agent, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Zero-based column for a 1-based entry, or `None` if out of range or not a number.
fn parse_column(entry: &str) -> Option<usize> {
    entry
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=COLS).contains(n))
        .map(|n| n - 1)
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn choose_move(&mut self, board: &Board, active: Player) -> Result<usize, AgentError> {
        if board.is_full() {
            return Err(AgentError::NoLegalMove);
        }

        loop {
            write!(
                self.output,
                "{} ({}) choose a column [1-{}]: ",
                active.name(),
                active.glyph(),
                COLS
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }

            match parse_column(line.trim()) {
                Some(col) if !board.is_column_full(col) => return Ok(col),
                Some(col) => writeln!(self.output, "Column {} is full, try again.", col + 1)?,
                None => writeln!(self.output, "Invalid input, try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
