//! Reachability checks for a resumed position.

use super::super::{Board, ResumeError, Square, Symbol};
use tracing::{instrument, warn};

/// Checks that `board` can be continued with `next_player` to move.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. the board must have a free square,
/// 2. the symbol counts must differ by at most one,
/// 3. `next_player` must not have more marks than the opponent.
///
/// # Errors
///
/// Returns [`ResumeError::InvalidInitialBoardState`] for checks 1 and 2 and
/// [`ResumeError::InvalidNextPlayer`] for check 3.
#[instrument(skip(board))]
pub fn validate_resume(board: &Board, next_player: Symbol) -> Result<(), ResumeError> {
    let crosses = board.count_of(Symbol::Cross);
    let circles = board.count_of(Symbol::Circle);

    if board.count_of(Square::Empty) == 0 {
        warn!(crosses, circles, "Resumed board has no free square");
        return Err(ResumeError::InvalidInitialBoardState { crosses, circles });
    }

    if crosses.abs_diff(circles) > 1 {
        warn!(crosses, circles, "Resumed board is unbalanced");
        return Err(ResumeError::InvalidInitialBoardState { crosses, circles });
    }

    if board.count_of(next_player) > board.count_of(next_player.opposite()) {
        warn!(crosses, circles, "Next player is already ahead");
        return Err(ResumeError::InvalidNextPlayer { next_player });
    }

    Ok(())
}
