//! Min-conflicts search.

use nqueens_config::{MinConflictsConfig, DEFAULT_ITERATION_LIMIT};
use nqueens_core::{collisions, collisions_after, Board};
use rand::Rng;
use tracing::{debug, trace};

use super::LocalSearch;
use crate::heuristic::forager::TieBreakForager;
use crate::heuristic::r#move::QueenMove;
use crate::result::{SearchOutcome, Termination};

/// Min-conflicts local search.
///
/// Each iteration picks a column uniformly at random (the same column may
/// be picked repeatedly), evaluates every row for that column's queen and
/// moves it to a random row among those tied for the fewest collisions.
/// The current row takes part in the tie, so an iteration may leave the
/// board unchanged.
///
/// The search is not monotone, so it stops at zero collisions
/// ([`Termination::Solved`]) or after `iteration_limit` iterations
/// ([`Termination::IterationLimit`]), whichever comes first.
///
/// # Example
///
/// ```
/// use nqueens_core::Board;
/// use nqueens_solver::{LocalSearch, MinConflicts};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut search = MinConflicts::new(500);
/// let mut board = Board::new(vec![0, 0, 0, 0, 0, 0]).unwrap();
/// let outcome = search.solve(&mut board, &mut StdRng::seed_from_u64(8));
///
/// assert!(outcome.iterations <= 500);
/// assert_eq!(outcome.collisions, board.collisions());
/// ```
#[derive(Debug, Clone)]
pub struct MinConflicts {
    iteration_limit: u64,
    forager: TieBreakForager,
}

impl MinConflicts {
    /// Creates a search that gives up after `iteration_limit` iterations.
    pub fn new(iteration_limit: u64) -> Self {
        Self {
            iteration_limit,
            forager: TieBreakForager::new(),
        }
    }

    /// Creates a search from configuration.
    pub fn from_config(config: &MinConflictsConfig) -> Self {
        Self::new(config.iteration_limit)
    }

    /// Returns the iteration limit.
    pub fn iteration_limit(&self) -> u64 {
        self.iteration_limit
    }
}

impl Default for MinConflicts {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATION_LIMIT)
    }
}

impl LocalSearch for MinConflicts {
    fn solve<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome {
        let size = board.size();
        let mut iterations = 0u64;
        let mut moves_evaluated = 0u64;
        let mut current = collisions(board);

        while current > 0 && iterations < self.iteration_limit {
            let column = rng.random_range(0..size);
            let occupied = board.row(column);

            self.forager.step_started();
            for row in 0..size {
                let after = if row == occupied {
                    current
                } else {
                    moves_evaluated += 1;
                    collisions_after(board, column, row)
                };
                self.forager.add_move(QueenMove::new(column, row, after));
            }

            let Some(step) = self.forager.pick_move(rng) else {
                break;
            };
            step.apply(board);
            current = step.collisions;
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
        }

        let termination = if current == 0 {
            Termination::Solved
        } else {
            Termination::IterationLimit
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
        "Min Conflicts"
    }
}

/// Runs min-conflicts on `board` with the default iteration limit of 1000.
pub fn min_conflicts<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> SearchOutcome {
    MinConflicts::default().solve(board, rng)
}
