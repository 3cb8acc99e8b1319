//! Players and their scores.

use super::Symbol;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Whoever started with a given symbol, and how many rounds they have won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Player {
    symbol: Symbol,
    #[new(default)]
    score: u32,
}

impl Player {
    /// The symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Rounds won so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn record_win(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}
