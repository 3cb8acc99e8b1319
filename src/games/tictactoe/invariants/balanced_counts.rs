//! Balanced counts invariant: crosses and circles differ by at most one.

use super::super::{Game, GameObserver, Symbol};
use super::Invariant;
use tracing::warn;

/// Invariant: symbol counts on the board differ by at most one.
pub struct BalancedCounts;

impl<O: GameObserver> Invariant<Game<O>> for BalancedCounts {
    fn holds(game: &Game<O>) -> bool {
        let crosses = game.board().count_of(Symbol::Cross);
        let circles = game.board().count_of(Symbol::Circle);
        let valid = crosses.abs_diff(circles) <= 1;
        if !valid {
            warn!(crosses, circles, "Board balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Cross and circle counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_resumed_balanced_board_holds() {
        let mut cells = [Square::Empty; 9];
        cells[0] = Square::Occupied(Symbol::Cross);
        let game = Game::resume(&cells, Symbol::Circle).expect("valid position");
        assert!(BalancedCounts::holds(&game));
    }
}
