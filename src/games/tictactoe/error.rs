//! Error types for board construction, resuming and move selection.

use super::Symbol;

/// Error returned when a game cannot be resumed from a supplied position.
///
/// Variants are listed in the order the checks run; only the first failing
/// check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ResumeError {
    /// The supplied cell sequence does not hold exactly 9 cells.
    #[display("Board must have exactly 9 cells, got {}", len)]
    InvalidBoardSize {
        /// Number of cells supplied.
        len: usize,
    },

    /// The position is full or cannot be reached by alternating play.
    #[display(
        "Board state is not resumable ({} crosses, {} circles)",
        crosses,
        circles
    )]
    InvalidInitialBoardState {
        /// Cells occupied by crosses.
        crosses: usize,
        /// Cells occupied by circles.
        circles: usize,
    },

    /// The declared next player already has more marks than the opponent.
    #[display("Player {} cannot move next on this board", next_player)]
    InvalidNextPlayer {
        /// The rejected next player.
        next_player: Symbol,
    },
}

impl std::error::Error for ResumeError {}

/// Contract violation when selecting a square.
///
/// An occupied square is not an error: `select` returns `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The current round already has a winner or ended in a draw.
    #[display("Round is already decided")]
    RoundAlreadyDecided,
}

impl std::error::Error for SelectError {}
