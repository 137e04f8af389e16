//! Collision evaluation.
//!
//! The objective both searches minimize: the number of unordered column
//! pairs `(i, j)`, `i < j`, whose queens share a row or a diagonal.
//! Evaluation is O(N²) per call.

use crate::board::Board;

/// Returns the attack contribution of one queen pair.
///
/// `offset` is the column distance `j - i`. The row check and the diagonal
/// check are counted independently, so a pair could in principle count
/// twice; for `offset > 0` the two conditions are mutually exclusive and
/// the result is at most 1.
///
/// # Example
///
/// ```
/// use nqueens_core::pair_attacks;
///
/// assert_eq!(pair_attacks(2, 2, 3), 1); // same row
/// assert_eq!(pair_attacks(0, 3, 3), 1); // same diagonal
/// assert_eq!(pair_attacks(0, 2, 1), 0);
/// ```
#[inline]
pub fn pair_attacks(row_a: usize, row_b: usize, offset: usize) -> usize {
    let mut attacks = 0;
    if row_a == row_b {
        attacks += 1;
    }
    if row_a == row_b + offset || row_a + offset == row_b {
        attacks += 1;
    }
    attacks
}

/// Returns the number of attacking queen pairs on `board`.
///
/// # Example
///
/// ```
/// use nqueens_core::{collisions, Board};
///
/// assert_eq!(collisions(&Board::new(vec![1, 3, 0, 2]).unwrap()), 0);
/// assert_eq!(collisions(&Board::new(vec![0, 0, 0, 0]).unwrap()), 6);
/// ```
pub fn collisions(board: &Board) -> usize {
    count_pairs(board.rows(), |column| board.row(column))
}

/// Returns the collision count `board` would have with the queen in
/// `column` moved to `row`.
///
/// The board is not modified.
///
/// # Example
///
/// ```
/// use nqueens_core::{collisions_after, Board};
///
/// let board = Board::new(vec![1, 0, 0, 2]).unwrap();
/// assert_eq!(board.collisions(), 3);
/// assert_eq!(collisions_after(&board, 1, 3), 0);
/// ```
pub fn collisions_after(board: &Board, column: usize, row: usize) -> usize {
    count_pairs(board.rows(), |c| if c == column { row } else { board.row(c) })
}

fn count_pairs(rows: &[usize], row_of: impl Fn(usize) -> usize) -> usize {
    let size = rows.len();
    let mut count = 0;
    for i in 0..size {
        let row_i = row_of(i);
        for j in (i + 1)..size {
            count += pair_attacks(row_i, row_of(j), j - i);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(rows: &[usize]) -> Board {
        Board::new(rows.to_vec()).unwrap()
    }

    fn arb_board(max_size: usize) -> impl Strategy<Value = Board> {
        (1..=max_size)
            .prop_flat_map(|n| proptest::collection::vec(0..n, n))
            .prop_map(|rows| Board::new(rows).unwrap())
    }

    #[test]
    fn test_known_solutions_have_no_collisions() {
        assert_eq!(collisions(&board(&[1, 3, 0, 2])), 0);
        assert_eq!(collisions(&board(&[2, 0, 3, 1])), 0);
        assert_eq!(collisions(&board(&[0, 4, 7, 5, 2, 6, 1, 3])), 0);
        assert_eq!(collisions(&board(&[0])), 0);
    }

    #[test]
    fn test_same_row_collisions() {
        // Every pair shares row 0.
        assert_eq!(collisions(&board(&[0, 0, 0, 0])), 6);
    }

    #[test]
    fn test_same_diagonal_collisions() {
        // Every pair shares the main diagonal.
        assert_eq!(collisions(&board(&[0, 1, 2, 3])), 6);
        assert_eq!(collisions(&board(&[3, 2, 1, 0])), 6);
    }

    #[test]
    fn test_mixed_collisions() {
        assert_eq!(collisions(&board(&[1, 0, 0, 2])), 3);
        assert_eq!(collisions(&board(&[6, 2, 5, 1, 4, 0, 3, 3])), 1);
        assert_eq!(collisions(&board(&[3, 3, 6, 3, 3, 7, 5, 0])), 9);
    }

    #[test]
    fn test_row_and_diagonal_are_exclusive_for_every_pair() {
        for size in 1..=10 {
            for row_a in 0..size {
                for row_b in 0..size {
                    for offset in 1..size {
                        assert!(
                            pair_attacks(row_a, row_b, offset) <= 1,
                            "pair ({row_a}, {row_b}) at offset {offset} counted twice"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_collisions_after_leaves_board_untouched() {
        let b = board(&[0, 0, 0, 0]);
        assert_eq!(collisions_after(&b, 0, 0), 6);
        // [3, 0, 0, 0]: three row pairs plus the diagonal pair of columns 0 and 3.
        assert_eq!(collisions_after(&b, 0, 3), 4);
        assert_eq!(b.rows(), &[0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn prop_reversal_symmetry(b in arb_board(12)) {
            let mut rows = b.rows().to_vec();
            rows.reverse();
            prop_assert_eq!(collisions(&b), collisions(&Board::new(rows).unwrap()));
        }

        #[test]
        fn prop_collisions_bounded_by_pair_count(b in arb_board(12)) {
            let n = b.size();
            prop_assert!(collisions(&b) <= n * (n - 1) / 2);
        }

        #[test]
        fn prop_collisions_after_matches_applied_move(
            (b, column, row) in arb_board(12).prop_flat_map(|b| {
                let n = b.size();
                (Just(b), 0..n, 0..n)
            })
        ) {
            let mut moved = b.clone();
            moved.place(column, row);
            prop_assert_eq!(collisions_after(&b, column, row), collisions(&moved));
        }
    }
}
