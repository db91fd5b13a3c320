//! The player abstraction and its simple implementations.
//!
//! A [`Player`] turns a game state into a column. The game loop holds two
//! boxed players and never cares which kind each one is.

use std::cell::RefCell;
use std::io::{self, BufRead, Cursor, Read, Stdin, Stdout, Write};
use std::rc::Rc;

use crate::error::PlayerError;
use crate::game::GameState;
use crate::playout::random_column;

/// Anything that can pick a column for the side to move.
pub trait Player {
    /// Pick a 0-indexed column for `state.turn_color()`.
    fn choose_move(&mut self, state: &GameState) -> Result<usize, PlayerError>;

    /// Display name used in logs and errors.
    fn name(&self) -> &str;
}

/// Plays a uniformly random legal column.
pub struct RandomBot {
    rng: fastrand::Rng,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible bot for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Player for RandomBot {
    fn choose_move(&mut self, state: &GameState) -> Result<usize, PlayerError> {
        random_column(state, &mut self.rng).ok_or(PlayerError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Where a [`HumanPlayer`] reads its lines from.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin for the duration of one read, so several players can share it.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// One source shared by several players, each taking the next line in turn.
impl<S: LineSource> LineSource for Rc<RefCell<S>> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        LineSource::read_line(&mut *self.borrow_mut(), buf)
    }
}

/// Reads 1-indexed columns from a text stream, prompting on `output`.
///
/// Input is converted to a 0-indexed column here, so the rest of the crate
/// only ever sees 0-indexed columns. Unparsable, out-of-range and full
/// columns are reported and asked for again.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<Stdin, Stdout> {
    /// Human at the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(io::stdin(), io::stdout(), name)
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    /// Give back the output stream, mostly so tests can inspect prompts.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, state: &GameState) -> Result<usize, PlayerError> {
        let legal = state.legal_columns();
        if legal.is_empty() {
            return Err(PlayerError::NoLegalMoves);
        }
        let width = state.board().width();

        loop {
            write!(self.output, "Enter column (1-{width}): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::EndOfInput);
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=width).contains(&n) => {
                    let column = n - 1;
                    if legal.contains(&column) {
                        return Ok(column);
                    }
                    writeln!(self.output, "Column {n} is full, choose another.")?;
                }
                _ => writeln!(self.output, "Please enter a number from 1 to {width}.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
