//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// The cross marker, rendered as `X`.
    #[strum(to_string = "X")]
    Cross,
    /// The circle marker, rendered as `O`.
    #[strum(to_string = "O")]
    Circle,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opposite(self) -> Self {
        match self {
            Symbol::Cross => Symbol::Circle,
            Symbol::Circle => Symbol::Cross,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

impl From<Symbol> for Square {
    fn from(symbol: Symbol) -> Self {
        Square::Occupied(symbol)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(symbol) => write!(f, "{}", symbol),
        }
    }
}
