use log::debug;
use ndarray::Array2;

use crate::{Field, GameState, Seat};

/// Decides the outcome of a board.
///
/// The board is read as a numeric matrix and the verdict comes from its
/// determinant: zero means the first player wins, anything else means the
/// second player wins. There is no draw and no three-in-a-row scan; a board
/// with any vacant field has no result yet.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use matrix_ttt::{check_matrix, Field, GameState, Seat, Symbol};
///
/// let zero = Field::Occupied { symbol: Symbol::Zero };
/// let one = Field::Occupied { symbol: Symbol::One };
///
/// // 0 1 0
/// // 1 0 1  <-- determinant is 0, the first player wins
/// // 0 1 0
/// let matrix = array![
///     [zero, one, zero],
///     [one, zero, one],
///     [zero, one, zero],
/// ];
///
/// assert_eq!(check_matrix(&matrix), GameState::Won { winner: Seat::First });
/// ```
pub fn check_matrix(matrix: &Array2<Field>) -> GameState {
    let numeric = match numeric_matrix(matrix) {
        Some(numeric) => numeric,
        None => return GameState::InProgress,
    };

    let det = determinant(&numeric);
    debug!("determinant of filled board: {}", det);

    // determinants of 3x3 matrices over {0, 1} are small integers, so exact
    // comparison carries no rounding risk
    if det == 0.0 {
        GameState::Won { winner: Seat::First }
    } else {
        GameState::Won {
            winner: Seat::Second,
        }
    }
}

/// Reads a grid of fields as a numeric matrix via the symbol values.
/// Returns `None` if any field is vacant, so the determinant can only ever
/// be taken of a fully occupied board.
pub fn numeric_matrix(matrix: &Array2<Field>) -> Option<Array2<f64>> {
    if matrix.iter().any(|field| matches!(field, Field::Vacant)) {
        return None;
    }
    Some(matrix.mapv(|field| match field {
        Field::Occupied { symbol } => symbol.value(),
        Field::Vacant => unreachable!("vacant field in a full matrix"),
    }))
}

fn determinant(matrix: &Array2<f64>) -> f64 {
    let m = |row: usize, column: usize| matrix[(row, column)];

    m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
        - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
        + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
}
