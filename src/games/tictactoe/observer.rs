//! Notifications from a [`Game`](super::Game) to its presentation layer.

use super::{Board, Outcome};

/// Receives state changes synchronously, inside the call that caused them.
///
/// For a single accepted move, `board_updated` always fires before
/// `winner_found`.
pub trait GameObserver {
    /// The board changed: a square was taken, or the board was cleared.
    fn board_updated(&mut self, _board: &Board) {}

    /// The round was decided. Never called while the round is undecided.
    fn winner_found(&mut self, _outcome: Outcome) {}
}

/// No observer.
impl GameObserver for () {}

/// A notification, as recorded by the `Vec<GameEvent>` observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Snapshot of the board after a change.
    BoardUpdated(Board),
    /// The round outcome.
    WinnerFound(Outcome),
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn board_updated(&mut self, board: &Board) {
        self.push(GameEvent::BoardUpdated(board.clone()));
    }

    fn winner_found(&mut self, outcome: Outcome) {
        self.push(GameEvent::WinnerFound(outcome));
    }
}
