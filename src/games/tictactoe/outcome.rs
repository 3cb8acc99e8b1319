//! Round outcomes.

use super::Symbol;
use serde::{Deserialize, Serialize};

/// How a round ended.
///
/// Only reported once a round is decided; an undecided round has no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The symbol completed a line.
    Winner(Symbol),
    /// The board filled up with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "Player {} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
