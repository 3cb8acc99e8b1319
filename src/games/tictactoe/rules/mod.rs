//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be queried without a running game.

pub mod draw;
pub mod resume;
pub mod win;

pub use draw::{is_draw, is_full};
pub use resume::validate_resume;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Terminal-condition check: a win, a draw, or `None` while undecided.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    match check_winner(board) {
        Some(symbol) => Some(Outcome::Winner(symbol)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
