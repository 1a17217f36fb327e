use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use std::fmt::Display;

use crate::{Field, Symbol};

pub type Coordinates = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    FieldOccupied,
    OutOfBounds,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::FieldOccupied => write!(f, "this square is already filled"),
            InvalidMove::OutOfBounds => write!(f, "coordinates are outside the board"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
        }
    }

    pub fn is_empty(&self, coordinates: Coordinates) -> Result<bool, InvalidMove> {
        let field = self.data.get(coordinates).ok_or(InvalidMove::OutOfBounds)?;
        Ok(matches!(field, Field::Vacant))
    }

    /// Writes `symbol` into the field at `coordinates` unconditionally.
    /// Occupancy is not checked at this layer; callers that must not
    /// overwrite a mark check `is_empty` first.
    pub fn mark(&mut self, coordinates: Coordinates, symbol: Symbol) -> Result<(), InvalidMove> {
        let field = self
            .data
            .get_mut(coordinates)
            .ok_or(InvalidMove::OutOfBounds)?;
        debug!("marking {:?} with {}", coordinates, symbol);
        *field = Field::Occupied { symbol };
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|field| !matches!(field, Field::Vacant))
    }

    /// Defensive copy of the grid for analysis or presentation.
    pub fn snapshot(&self) -> Array2<Field> {
        self.data.clone()
    }

    /// Multi-line depiction of the board. Vacant fields show their
    /// positional label 'a' through 'i' (row-major), occupied fields show
    /// the owning symbol.
    pub fn render(&self) -> String {
        self.data
            .rows()
            .into_iter()
            .enumerate()
            .map(|(row, fields)| {
                let cells = fields
                    .iter()
                    .enumerate()
                    .map(|(column, field)| match field {
                        Field::Occupied { symbol } => symbol.to_string(),
                        Field::Vacant => Self::label_for((row, column)).to_string(),
                    })
                    .join("  |  ");
                format!("      |      |\n   {}\n      |      |", cells)
            })
            .join("\n---------------------\n")
    }

    fn label_for(coordinates: Coordinates) -> char {
        (b'a' + (coordinates.0 * Self::SIZE.1 + coordinates.1) as u8) as char
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
