//! Single-queen relocation move.

use std::fmt;

use nqueens_core::Board;

/// Relocation of the queen in `column` to `row`, together with the board's
/// total collision count after the relocation.
///
/// Moves are generated in bulk each step and discarded once one is applied.
///
/// # Example
///
/// ```
/// use nqueens_core::Board;
/// use nqueens_solver::QueenMove;
///
/// let mut board = Board::new(vec![1, 0, 0, 2]).unwrap();
/// let m = QueenMove::new(1, 3, 0);
/// m.apply(&mut board);
/// assert_eq!(board.rows(), &[1, 3, 0, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueenMove {
    /// Column whose queen moves.
    pub column: usize,
    /// Target row.
    pub row: usize,
    /// Collision count of the whole board after the move.
    pub collisions: usize,
}

impl QueenMove {
    pub fn new(column: usize, row: usize, collisions: usize) -> Self {
        Self {
            column,
            row,
            collisions,
        }
    }

    /// Applies the move to `board`.
    ///
    /// # Panics
    ///
    /// Panics if the move lies outside the board.
    pub fn apply(&self, board: &mut Board) {
        board.place(self.column, self.row);
    }
}

impl fmt::Display for QueenMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {} -> row {} ({} collisions)",
            self.column, self.row, self.collisions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_test::boards::{one_move_from_solved_4, solved_4};

    #[test]
    fn test_apply_moves_queen() {
        let mut board = one_move_from_solved_4();
        QueenMove::new(1, 3, 0).apply(&mut board);
        assert_eq!(board, solved_4());
    }

    #[test]
    fn test_apply_to_same_row_is_noop() {
        let mut board = solved_4();
        QueenMove::new(2, 0, 0).apply(&mut board);
        assert_eq!(board, solved_4());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            QueenMove::new(3, 1, 4).to_string(),
            "column 3 -> row 1 (4 collisions)"
        );
    }
}
