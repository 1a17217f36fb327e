use crate::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Vacant,
    Occupied { symbol: Symbol },
}
