//! 3x3 board storage.

use super::error::{ResumeError, SelectError};
use super::position::Position;
use super::types::{Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board only knows about occupancy. Whose turn it is and whether a
/// position is reachable are decided by [`Game`](super::Game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from externally supplied cells.
    ///
    /// Only the shape is checked; game legality is validated by
    /// [`Game::resume`](super::Game::resume).
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::InvalidBoardSize`] unless exactly 9 cells are given.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(cells: &[Square]) -> Result<Self, ResumeError> {
        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|_| ResumeError::InvalidBoardSize { len: cells.len() })?;
        Ok(Self { squares })
    }

    /// Empties every square.
    pub fn clean(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Places `symbol` at `index` if that square is empty.
    ///
    /// Returns `Ok(false)` without touching the board when the square is
    /// already occupied.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::IndexOutOfRange`] for an index outside 0-8.
    pub fn select(&mut self, index: usize, symbol: Symbol) -> Result<bool, SelectError> {
        let pos = Position::from_index(index).ok_or(SelectError::IndexOutOfRange { index })?;
        Ok(self.place(pos, symbol))
    }

    /// Places `symbol` at `pos` if that square is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            debug!(position = %pos, "Square already occupied");
            return false;
        }
        *square = Square::Occupied(symbol);
        true
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts squares equal to `square` (a symbol, or [`Square::Empty`]).
    pub fn count_of(&self, square: impl Into<Square>) -> usize {
        let square = square.into();
        self.squares.iter().filter(|s| **s == square).count()
    }

    /// Returns the squares at `positions`, in the order given.
    pub fn cells_at(&self, positions: &[Position]) -> Vec<Square> {
        positions.iter().map(|pos| self.get(*pos)).collect()
    }

    /// Indices of the empty squares, ascending.
    pub fn free_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows of `X`, `O` and `.` separated by spaces, one row per line.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.squares.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_nine_free_squares() {
        let board = Board::new();
        assert_eq!(board.count_of(Square::Empty), 9);
        assert_eq!(board.free_indices(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_cells_rejects_wrong_size() {
        for len in [0, 3, 8, 10] {
            let cells = vec![Square::Empty; len];
            assert_eq!(
                Board::from_cells(&cells),
                Err(ResumeError::InvalidBoardSize { len })
            );
        }
    }

    #[test]
    fn test_from_cells_does_not_check_legality() {
        let cells = [Square::Occupied(Symbol::Cross); 9];
        let board = Board::from_cells(&cells).expect("size is valid");
        assert_eq!(board.count_of(Symbol::Cross), 9);
    }

    #[test]
    fn test_select_occupied_square_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.select(4, Symbol::Cross), Ok(true));
        assert_eq!(board.select(4, Symbol::Circle), Ok(false));
        assert_eq!(board.get(Position::Center), Square::Occupied(Symbol::Cross));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.select(9, Symbol::Cross),
            Err(SelectError::IndexOutOfRange { index: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cells_at_preserves_order() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Symbol::Cross);
        board.place(Position::BottomRight, Symbol::Circle);
        assert_eq!(
            board.cells_at(&[Position::BottomRight, Position::Center, Position::TopLeft]),
            vec![
                Square::Occupied(Symbol::Circle),
                Square::Empty,
                Square::Occupied(Symbol::Cross),
            ]
        );
    }

    #[test]
    fn test_clean_empties_board() {
        let mut board = Board::new();
        board.place(Position::Center, Symbol::Circle);
        board.clean();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Position::Center, Symbol::Cross);
        board.place(Position::TopRight, Symbol::Circle);
        assert_eq!(board.to_string(), ". . O\n. X .\n. . .");
    }
}
