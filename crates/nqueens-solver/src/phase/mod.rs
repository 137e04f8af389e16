//! Local search algorithms.
//!
//! Both searches implement [`LocalSearch`] so the benchmark harness can
//! drive them uniformly.

use std::fmt::Debug;

use nqueens_core::Board;
use rand::Rng;

use crate::result::SearchOutcome;

pub mod hill_climbing;
pub mod min_conflicts;

/// A local search that improves a board in place.
pub trait LocalSearch: Debug {
    /// Runs the search on `board`, drawing tie-breaks and random choices
    /// from `rng`. The board is left in the search's final state.
    fn solve<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> SearchOutcome;

    /// Returns the algorithm name for logs and reports.
    fn name(&self) -> &'static str;
}
