use log::debug;
use std::fmt::Display;

use crate::{
    check_matrix, numeric_matrix, Board, Coordinates, GameState, InputError, InvalidMove, Player,
    Seat, Symbol,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    Input { message: String },
    Move { kind: InvalidMove },
}

impl Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::Input { message } => write!(f, "input error: {}", message),
            MatchError::Move { kind } => write!(f, "invalid move: {}", kind),
        }
    }
}

impl From<InputError> for MatchError {
    fn from(error: InputError) -> Self {
        MatchError::Input {
            message: error.to_string(),
        }
    }
}

impl From<InvalidMove> for MatchError {
    fn from(kind: InvalidMove) -> Self {
        MatchError::Move { kind }
    }
}

/// Runs one game between two players. A finished match stays finished;
/// playing again takes a fresh `Match`.
pub struct Match {
    board: Board,
    players: [Player; 2],
    turn: Option<Seat>,
}

impl Match {
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            turn: None,
        }
    }

    /// Advances the turn and returns the seat that moves now. The first
    /// seat always opens the game; turns strictly alternate afterwards.
    pub fn next_player(&mut self) -> Seat {
        let seat = match self.turn {
            None | Some(Seat::Second) => Seat::First,
            Some(Seat::First) => Seat::Second,
        };
        self.turn = Some(seat);
        seat
    }

    fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Applies a move for `seat` if its target square is empty, then asks
    /// the checker for a verdict on the resulting board. A rejected move
    /// leaves both the board and the turn untouched.
    pub fn try_move(&mut self, seat: Seat, coordinates: Coordinates) -> Result<GameState, InvalidMove> {
        if !self.board.is_empty(coordinates)? {
            return Err(InvalidMove::FieldOccupied);
        }
        self.board.mark(coordinates, self.player(seat).symbol())?;
        Ok(check_matrix(&self.board.snapshot()))
    }

    /// Plays the match to completion and returns the winning symbol.
    ///
    /// Each turn the board is printed, the current player is asked for a
    /// move, and a move into a filled square sends the SAME player back to
    /// choose again. After every accepted move the checker is consulted;
    /// the ninth accepted move fills the board, so the verdict arrives no
    /// later than that.
    pub fn play(&mut self) -> Result<Symbol, MatchError> {
        loop {
            let seat = self.next_player();
            debug_assert!(!self.board.is_full(), "turn started on a full board");

            let state = loop {
                println!("{}", self.board.render());
                let coordinates = self.player(seat).make_move()?;
                match self.try_move(seat, coordinates) {
                    Ok(state) => break state,
                    Err(InvalidMove::FieldOccupied) => {
                        println!("This square is already filled!");
                        println!();
                    }
                    Err(kind @ InvalidMove::OutOfBounds) => return Err(kind.into()),
                }
            };

            if let GameState::Won { winner } = state {
                let symbol = self.player(winner).symbol();
                debug!("match won by seat {:?} ({})", winner, symbol);

                if let Some(numeric) = numeric_matrix(&self.board.snapshot()) {
                    println!("{}", numeric);
                }
                println!("GAME OVER!");
                println!("{} WINS!", symbol);
                println!();
                println!("{}", self.board.render());
                return Ok(symbol);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn human_match() -> Match {
        Match::new(
            Player::Human {
                symbol: Symbol::Zero,
            },
            Player::Human { symbol: Symbol::One },
        )
    }

    #[test]
    fn first_seat_opens_and_turns_alternate() {
        let mut game = human_match();
        assert_eq!(game.next_player(), Seat::First);
        assert_eq!(game.next_player(), Seat::Second);
        assert_eq!(game.next_player(), Seat::First);
    }

    #[test]
    fn occupied_square_rejects_without_side_effects() {
        let mut game = human_match();

        let seat = game.next_player();
        assert_eq!(game.try_move(seat, (0, 0)), Ok(GameState::InProgress));

        let seat = game.next_player();
        let before = game.board.snapshot();
        assert_eq!(
            game.try_move(seat, (0, 0)),
            Err(InvalidMove::FieldOccupied)
        );
        assert_eq!(game.board.snapshot(), before);
        assert_eq!(game.turn, Some(Seat::Second));

        // the same seat retries and succeeds
        assert_eq!(game.try_move(seat, (1, 1)), Ok(GameState::InProgress));
    }

    #[test]
    fn singular_final_board_hands_the_game_to_the_first_seat() {
        // 0 1 0
        // 1 0 1  determinant 0
        // 0 1 0
        let moves = vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        assert_eq!(play_scripted(moves), GameState::Won { winner: Seat::First });
    }

    #[test]
    fn regular_final_board_hands_the_game_to_the_second_seat() {
        // 1 0 1
        // 0 1 0  determinant -1
        // 1 0 0
        let moves = vec![
            (0, 1),
            (0, 0),
            (1, 0),
            (0, 2),
            (1, 2),
            (1, 1),
            (2, 1),
            (2, 0),
            (2, 2),
        ];
        assert_eq!(
            play_scripted(moves),
            GameState::Won {
                winner: Seat::Second
            }
        );
    }

    /// Feeds a full row-major move script through the controller,
    /// alternating seats, and returns the final verdict.
    fn play_scripted(moves: Vec<Coordinates>) -> GameState {
        let mut game = human_match();
        let mut state = GameState::InProgress;
        for (index, coordinates) in moves.iter().enumerate() {
            assert_eq!(
                state,
                GameState::InProgress,
                "game ended early at move {}",
                index
            );
            let seat = game.next_player();
            state = game.try_move(seat, *coordinates).unwrap();
        }
        state
    }

    #[test]
    fn computer_match_runs_to_a_verdict() {
        // the random strategy may propose filled squares; the retry loop
        // still drives the game to the ninth accepted move
        let mut game = Match::new(
            Player::Computer {
                symbol: Symbol::Zero,
            },
            Player::Computer {
                symbol: Symbol::One,
            },
        );
        let winner = game.play().unwrap();
        assert!(matches!(winner, Symbol::Zero | Symbol::One));
        assert!(game.board.is_full());
    }
}
