use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Zero => write!(f, "0"),
            Symbol::One => write!(f, "1"),
        }
    }
}

impl Symbol {
    /// Numeric value of the symbol when the board is read as a matrix.
    pub fn value(&self) -> f64 {
        match self {
            Symbol::Zero => 0.0,
            Symbol::One => 1.0,
        }
    }
}
