mod board;
mod field;
mod gamestate;
mod r#match;
mod matrix_checker;
mod player;
mod symbol;

pub use board::{Board, Coordinates, InvalidMove};
pub use field::Field;
pub use gamestate::{GameState, Seat};
pub use matrix_checker::{check_matrix, numeric_matrix};
pub use player::{position_for_label, InputError, Player};
pub use r#match::{Match, MatchError};
pub use symbol::Symbol;
