//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square, Symbol};
use tracing::instrument;

/// The 8 lines in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the symbol holding a complete line, if any.
///
/// The first complete line in [`LINES`] order decides the winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|line| line_owner(&board.cells_at(line)))
}

/// The symbol occupying all cells of `cells`, if they agree.
fn line_owner(cells: &[Square]) -> Option<Symbol> {
    let (first, rest) = cells.split_first()?;
    let symbol = first.symbol()?;
    rest.iter()
        .all(|s| *s == Square::Occupied(symbol))
        .then_some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_symbol() {
        for symbol in [Symbol::Cross, Symbol::Circle] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line {
                    board.place(pos, symbol);
                }
                assert_eq!(check_winner(&board), Some(symbol), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Symbol::Cross);
        board.place(Position::TopCenter, Symbol::Circle);
        board.place(Position::TopRight, Symbol::Cross);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Symbol::Cross);
        board.place(Position::TopCenter, Symbol::Cross);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Bottom row for O and left column for X: rows are scanned first.
        let mut board = Board::new();
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.place(pos, Symbol::Circle);
        }
        for pos in [Position::TopRight, Position::MiddleRight] {
            board.place(pos, Symbol::Cross);
        }
        board.place(Position::TopLeft, Symbol::Cross);
        board.place(Position::TopCenter, Symbol::Cross);
        assert_eq!(check_winner(&board), Some(Symbol::Cross));

        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
            board.place(pos, Symbol::Cross);
        }
        for pos in [Position::TopRight, Position::MiddleRight, Position::BottomRight] {
            board.place(pos, Symbol::Circle);
        }
        assert_eq!(check_winner(&board), Some(Symbol::Cross));
    }
}
