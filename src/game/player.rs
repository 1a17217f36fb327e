use log::debug;
use rand::Rng;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::{Board, Coordinates, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    StreamClosed,
    Read { message: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::StreamClosed => write!(f, "input stream is exhausted"),
            InputError::Read { message } => write!(f, "failed to read input: {}", message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human { symbol: Symbol },
    Computer { symbol: Symbol },
}

impl Player {
    pub fn symbol(&self) -> Symbol {
        match self {
            Player::Human { symbol } => *symbol,
            Player::Computer { symbol } => *symbol,
        }
    }

    /// Produces the coordinates of the player's next move.
    ///
    /// The human variant prompts for a single-letter label on stdin. The
    /// computer variant draws a row and a column uniformly at random; it
    /// does NOT consult board occupancy, so it may well propose a filled
    /// square and be asked again by the match loop.
    pub fn make_move(&self) -> Result<Coordinates, InputError> {
        match self {
            Player::Human { symbol } => {
                println!("Player: {}", symbol);
                print!("> Position: ");
                io::stdout().flush().map_err(|e| InputError::Read {
                    message: format!("{}", e),
                })?;

                let mut line = String::new();
                let read = io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|e| InputError::Read {
                        message: format!("{}", e),
                    })?;
                if read == 0 {
                    return Err(InputError::StreamClosed);
                }

                Ok(position_for_label(line.trim()))
            }
            Player::Computer { .. } => {
                let mut rng = rand::thread_rng();
                let coordinates = (
                    rng.gen_range(0..Board::SIZE.0),
                    rng.gen_range(0..Board::SIZE.1),
                );
                debug!("computer picked {:?}", coordinates);
                Ok(coordinates)
            }
        }
    }
}

/// Maps a position label to grid coordinates, row-major: 'a' is the top-left
/// square, 'i' the bottom-right. The mapping is total: anything that is not
/// one of the labels 'a' through 'h' resolves to the bottom-right square.
pub fn position_for_label(label: &str) -> Coordinates {
    match label {
        "a" => (0, 0),
        "b" => (0, 1),
        "c" => (0, 2),
        "d" => (1, 0),
        "e" => (1, 1),
        "f" => (1, 2),
        "g" => (2, 0),
        "h" => (2, 1),
        _ => (2, 2),
    }
}
