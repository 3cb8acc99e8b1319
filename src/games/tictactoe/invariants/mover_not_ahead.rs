//! Turn invariant: the player to move never has more marks than the opponent.

use super::super::{Game, GameObserver};
use super::Invariant;
use tracing::warn;

/// Invariant: the current player has not occupied more squares than the
/// opponent.
///
/// Holds from any resumable position as long as moves alternate.
pub struct MoverNotAhead;

impl<O: GameObserver> Invariant<Game<O>> for MoverNotAhead {
    fn holds(game: &Game<O>) -> bool {
        let mover = game.current_player();
        let mover_count = game.board().count_of(mover);
        let opponent_count = game.board().count_of(mover.opposite());
        let valid = mover_count <= opponent_count;
        if !valid {
            warn!(%mover, mover_count, opponent_count, "Turn order violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Player to move has no more marks than the opponent"
    }
}
