//! Search outcomes.

use std::fmt;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The board reached zero collisions.
    Solved,
    /// No single-queen move strictly reduces collisions.
    Plateau,
    /// The iteration limit was reached with collisions remaining.
    IterationLimit,
}

impl Termination {
    /// Returns the snake_case name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Solved => "solved",
            Termination::Plateau => "plateau",
            Termination::IterationLimit => "iteration_limit",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one search run.
///
/// The board itself is mutated in place; the outcome records how the search
/// ended and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Termination reason.
    pub termination: Termination,
    /// Search cost: iterations performed, not counting a hill-climbing move
    /// that solves the board.
    pub iterations: u64,
    /// Collision count of the final board.
    pub collisions: usize,
    /// Number of candidate boards evaluated.
    pub moves_evaluated: u64,
}

impl SearchOutcome {
    /// Returns true only if the board was solved.
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_solver::{SearchOutcome, Termination};
    ///
    /// let outcome = SearchOutcome {
    ///     termination: Termination::IterationLimit,
    ///     iterations: 1000,
    ///     collisions: 2,
    ///     moves_evaluated: 16000,
    /// };
    /// assert!(!outcome.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.termination == Termination::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_names() {
        assert_eq!(Termination::Solved.to_string(), "solved");
        assert_eq!(Termination::Plateau.to_string(), "plateau");
        assert_eq!(Termination::IterationLimit.to_string(), "iteration_limit");
    }

    #[test]
    fn test_only_solved_is_success() {
        let outcome = |termination| SearchOutcome {
            termination,
            iterations: 0,
            collisions: 0,
            moves_evaluated: 0,
        };
        assert!(outcome(Termination::Solved).is_success());
        assert!(!outcome(Termination::Plateau).is_success());
        assert!(!outcome(Termination::IterationLimit).is_success());
    }
}
