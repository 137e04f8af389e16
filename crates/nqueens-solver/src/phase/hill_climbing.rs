//! Steepest-ascent hill climbing.

use nqueens_core::{collisions, collisions_after, Board};
use rand::Rng;
use tracing::{debug, trace};

use super::LocalSearch;
use crate::heuristic::forager::TieBreakForager;
use crate::heuristic::r#move::QueenMove;
use crate::result::{SearchOutcome, Termination};

/// Steepest-ascent hill climbing.
///
/// Each step evaluates all N·(N-1) single-queen moves, keeps the moves tied
/// for the lowest collision count and applies one of them at random. The
/// search stops with [`Termination::Solved`] at zero collisions and with
/// [`Termination::Plateau`] when the best move does not strictly reduce
/// collisions. Since collisions strictly decrease on every applied move,
/// the search performs at most `N(N-1)/2` steps.
///
/// The search cost counts applied moves that leave collisions behind; the
/// move that reaches zero ends the search without being counted. A board
/// that starts with zero collisions is reported as solved after zero
/// iterations.
///
/// # Example
///
/// ```
/// use nqueens_core::Board;
/// use nqueens_solver::{LocalSearch, SteepestHillClimbing, Termination};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut board = Board::new(vec![1, 0, 0, 2]).unwrap();
/// let outcome = SteepestHillClimbing::new().solve(&mut board, &mut StdRng::seed_from_u64(1));
///
/// assert_eq!(outcome.termination, Termination::Solved);
/// assert_eq!(outcome.iterations, 0);
/// assert_eq!(board.rows(), &[1, 3, 0, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SteepestHillClimbing {
    forager: TieBreakForager,
}

impl SteepestHillClimbing {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalSearch for SteepestHillClimbing {
    fn solve<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome {
        let size = board.size();
        let mut iterations = 0u64;
        let mut moves_evaluated = 0u64;
        let mut current = collisions(board);

        let termination = loop {
            if current == 0 {
                break Termination::Solved;
            }

            self.forager.step_started();
            for column in 0..size {
                let occupied = board.row(column);
                for row in (0..size).filter(|&r| r != occupied) {
                    let after = collisions_after(board, column, row);
                    moves_evaluated += 1;
                    self.forager.add_move(QueenMove::new(column, row, after));
                }
            }

            let step = match self.forager.best_collisions() {
                Some(best) if best < current => self.forager.pick_move(rng),
                _ => None,
            };
            let Some(step) = step else {
                break Termination::Plateau;
            };

            step.apply(board);
            current = step.collisions;
            if current == 0 {
                break Termination::Solved;
            }
            iterations += 1;

            trace!(
                event = "step",
                algorithm = self.name(),
                step = iterations,
                column = step.column as u64,
                row = step.row as u64,
                ties = self.forager.tie_count() as u64,
                collisions = current as u64,
            );
        };

        debug!(
            event = "search_end",
            algorithm = self.name(),
            termination = termination.as_str(),
            iterations = iterations,
            collisions = current as u64,
            moves_evaluated = moves_evaluated,
        );

        SearchOutcome {
            termination,
            iterations,
            collisions: current,
            moves_evaluated,
        }
    }

    fn name(&self) -> &'static str {
        "Steepest Hill Climbing"
    }
}

/// Runs steepest-ascent hill climbing on `board`.
pub fn steepest_hill_climbing<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> SearchOutcome {
    SteepestHillClimbing::new().solve(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_test::boards::{
        descent_8_plateau, descent_8_start, one_move_from_solved_4, plateau_8, same_row, solved_4,
        solved_8,
    };
    use nqueens_test::{board, seeded_rng};
    use proptest::prelude::*;

    fn is_local_optimum(b: &Board) -> bool {
        let current = b.collisions();
        (0..b.size()).all(|column| {
            (0..b.size())
                .filter(|&row| row != b.row(column))
                .all(|row| collisions_after(b, column, row) >= current)
        })
    }

    #[test]
    fn test_solved_board_is_immediate_success() {
        let mut board = solved_8();
        let outcome = steepest_hill_climbing(&mut board, &mut seeded_rng(0));

        assert_eq!(outcome.termination, Termination::Solved);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.moves_evaluated, 0);
        assert_eq!(board, solved_8());
    }

    #[test]
    fn test_single_forced_move_solves() {
        let mut board = one_move_from_solved_4();
        let outcome = steepest_hill_climbing(&mut board, &mut seeded_rng(5));

        assert!(outcome.is_success());
        // The solving move itself is not part of the search cost.
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.collisions, 0);
        assert_eq!(outcome.moves_evaluated, 12);
        assert_eq!(board, solved_4());
    }

    #[test]
    fn test_search_cost_excludes_solving_move() {
        // Steepest descent from this board is unique: 7 -> ... -> 0 in three
        // applied moves, of which the last one solves the board.
        for seed in 0..5 {
            let mut b = board(&[0, 0, 0, 0, 2]);
            let outcome = steepest_hill_climbing(&mut b, &mut seeded_rng(seed));

            assert_eq!(outcome.termination, Termination::Solved);
            assert_eq!(outcome.iterations, 2);
            assert_eq!(outcome.moves_evaluated, 3 * 20);
            assert_eq!(b.rows(), &[4, 1, 3, 0, 2]);
        }
    }

    #[test]
    fn test_plateau_start_fails_without_moving() {
        let mut board = plateau_8();
        let outcome = steepest_hill_climbing(&mut board, &mut seeded_rng(0));

        assert_eq!(outcome.termination, Termination::Plateau);
        assert!(!outcome.is_success());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.collisions, 1);
        assert_eq!(outcome.moves_evaluated, 56);
        assert_eq!(board, plateau_8());
    }

    #[test]
    fn test_descent_stops_in_plateau_state() {
        for seed in 0..5 {
            let mut board = descent_8_start();
            let outcome = steepest_hill_climbing(&mut board, &mut seeded_rng(seed));

            assert_eq!(outcome.termination, Termination::Plateau);
            assert_eq!(outcome.iterations, 3);
            assert_eq!(outcome.collisions, 1);
            assert_eq!(board, descent_8_plateau());
        }
    }

    #[test]
    fn test_single_queen_board_is_solved() {
        let mut board = Board::new(vec![0]).unwrap();
        let outcome = steepest_hill_climbing(&mut board, &mut seeded_rng(0));
        assert_eq!(outcome.termination, Termination::Solved);
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut a = same_row(10);
        let mut b = same_row(10);
        let outcome_a = steepest_hill_climbing(&mut a, &mut seeded_rng(77));
        let outcome_b = steepest_hill_climbing(&mut b, &mut seeded_rng(77));

        assert_eq!(outcome_a, outcome_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_is_reusable() {
        let mut search = SteepestHillClimbing::new();
        let mut rng = seeded_rng(3);

        let mut first = plateau_8();
        assert_eq!(search.solve(&mut first, &mut rng).termination, Termination::Plateau);

        let mut second = one_move_from_solved_4();
        assert_eq!(search.solve(&mut second, &mut rng).termination, Termination::Solved);
    }

    proptest! {
        #[test]
        fn prop_terminates_with_strict_descent(seed in any::<u64>(), n in 4usize..10) {
            let mut rng = seeded_rng(seed);
            let mut board = Board::random(n, &mut rng).unwrap();
            let initial = board.collisions();

            let outcome = steepest_hill_climbing(&mut board, &mut rng);

            // Each applied move removed at least one collision.
            prop_assert!(outcome.iterations as usize <= initial);
            prop_assert!(outcome.collisions + outcome.iterations as usize <= initial);
            prop_assert_eq!(outcome.collisions, board.collisions());
            match outcome.termination {
                Termination::Solved => prop_assert!(board.is_solution()),
                Termination::Plateau => {
                    prop_assert!(outcome.collisions > 0);
                    prop_assert!(is_local_optimum(&board));
                }
                Termination::IterationLimit => prop_assert!(false, "hill climbing has no limit"),
            }
        }
    }
}
