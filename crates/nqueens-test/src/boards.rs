//! Known N-Queens boards.
//!
//! Every board here has been checked against the collision evaluator; the
//! expected counts are asserted in this module's tests.

use nqueens_core::Board;

/// Builds a board from rows, panicking on invalid input.
pub fn board(rows: &[usize]) -> Board {
    Board::new(rows.to_vec()).expect("fixture rows must be valid")
}

/// A 4-queens solution: rows [1, 3, 0, 2].
pub fn solved_4() -> Board {
    board(&[1, 3, 0, 2])
}

/// The mirrored 4-queens solution: rows [2, 0, 3, 1].
pub fn solved_4_mirrored() -> Board {
    board(&[2, 0, 3, 1])
}

/// An 8-queens solution.
pub fn solved_8() -> Board {
    board(&[0, 4, 7, 5, 2, 6, 1, 3])
}

/// All queens on one row: every pair collides, n(n-1)/2 collisions.
pub fn same_row(n: usize) -> Board {
    board(&vec![0; n])
}

/// All queens on the main diagonal: every pair collides.
pub fn main_diagonal(n: usize) -> Board {
    board(&(0..n).collect::<Vec<_>>())
}

/// A 4-queens board with 3 collisions and exactly one best move
/// (column 1 to row 3), which solves it.
pub fn one_move_from_solved_4() -> Board {
    board(&[1, 0, 0, 2])
}

/// An 8-queens local optimum with 1 collision: no single-queen move
/// reduces the collision count.
pub fn plateau_8() -> Board {
    board(&[6, 2, 5, 1, 4, 0, 3, 3])
}

/// An 8-queens board with 9 collisions whose steepest descent is unique at
/// every step: three moves reach [`descent_8_plateau`].
pub fn descent_8_start() -> Board {
    board(&[3, 3, 6, 3, 3, 7, 5, 0])
}

/// The 1-collision plateau reached from [`descent_8_start`].
pub fn descent_8_plateau() -> Board {
    board(&[4, 2, 6, 3, 1, 7, 5, 0])
}
