#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Won { winner: Seat },
    InProgress,
}

/// Identifies a player by position in the match, not by symbol.
/// The first seat always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(&self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}
