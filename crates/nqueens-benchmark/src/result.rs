//! Benchmark result types.

use std::time::Duration;

use nqueens_core::Board;
use nqueens_solver::{SearchOutcome, Termination};

/// Result of a single trial of one algorithm.
#[derive(Debug, Clone)]
pub struct TrialRun {
    /// Trial index (0-based).
    pub trial_index: usize,
    /// Collision count of the random starting board.
    pub initial_collisions: usize,
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Wall-clock time of the search call.
    pub solve_time: Duration,
    /// The board as the search left it.
    pub final_board: Board,
}

impl TrialRun {
    /// Returns candidate evaluations per second.
    pub fn moves_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.outcome.moves_evaluated as f64 / self.solve_time.as_secs_f64()
        }
    }
}

/// Aggregated trials of one algorithm.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Individual trials.
    pub runs: Vec<TrialRun>,
}

impl AlgorithmResult {
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            runs: Vec::new(),
        }
    }

    /// Adds a trial to the results.
    pub fn add_run(&mut self, run: TrialRun) {
        self.runs.push(run);
    }

    /// Returns the number of trials.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    fn count(&self, termination: Termination) -> usize {
        self.runs
            .iter()
            .filter(|r| r.outcome.termination == termination)
            .count()
    }

    /// Returns the number of trials that reached zero collisions.
    pub fn success_count(&self) -> usize {
        self.count(Termination::Solved)
    }

    /// Returns the number of trials stuck on a plateau.
    pub fn plateau_count(&self) -> usize {
        self.count(Termination::Plateau)
    }

    /// Returns the number of trials that exhausted the iteration limit.
    pub fn iteration_limit_count(&self) -> usize {
        self.count(Termination::IterationLimit)
    }

    /// Returns the fraction of solved trials, in `[0, 1]`.
    pub fn success_rate(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.success_count() as f64 / self.runs.len() as f64
    }

    /// Returns the summed search cost (iterations) over all trials.
    pub fn total_search_cost(&self) -> u64 {
        self.runs.iter().map(|r| r.outcome.iterations).sum()
    }

    /// Returns the average search cost per trial.
    ///
    /// # Example
    ///
    /// ```
    /// use nqueens_benchmark::{AlgorithmResult, TrialRun};
    /// use nqueens_core::Board;
    /// use nqueens_solver::{SearchOutcome, Termination};
    /// use std::time::Duration;
    ///
    /// let mut result = AlgorithmResult::new("Min Conflicts");
    /// for (index, iterations) in [10u64, 30].into_iter().enumerate() {
    ///     result.add_run(TrialRun {
    ///         trial_index: index,
    ///         initial_collisions: 5,
    ///         outcome: SearchOutcome {
    ///             termination: Termination::Solved,
    ///             iterations,
    ///             collisions: 0,
    ///             moves_evaluated: iterations * 3,
    ///         },
    ///         solve_time: Duration::from_millis(2),
    ///         final_board: Board::new(vec![1, 3, 0, 2]).unwrap(),
    ///     });
    /// }
    ///
    /// assert_eq!(result.avg_search_cost(), 20.0);
    /// ```
    pub fn avg_search_cost(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.total_search_cost() as f64 / self.runs.len() as f64
    }

    /// Returns the summed solve time.
    pub fn total_solve_time(&self) -> Duration {
        self.runs.iter().map(|r| r.solve_time).sum()
    }

    /// Returns the average solve time.
    pub fn avg_solve_time(&self) -> Duration {
        mean_duration(self.total_solve_time(), self.runs.len())
    }

    /// Returns the average candidate evaluations per second.
    pub fn avg_moves_per_second(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: f64 = self.runs.iter().map(|r| r.moves_per_second()).sum();
        total / self.runs.len() as f64
    }

    /// Returns the first solved board, if any trial succeeded.
    pub fn first_solution(&self) -> Option<&Board> {
        self.runs
            .iter()
            .find(|r| r.outcome.is_success())
            .map(|r| &r.final_board)
    }
}

/// Divides `total` by `count` in whole nanoseconds, without narrowing the
/// count.
fn mean_duration(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / count as u128;
    u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos)
}

/// Results of a full benchmark: both algorithms over the same trial count.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Board size every trial used.
    pub board_size: usize,
    /// Seed of the random source, drawn from OS entropy if none was set.
    pub seed: u64,
    /// Steepest hill climbing trials.
    pub hill_climbing: AlgorithmResult,
    /// Min-conflicts trials.
    pub min_conflicts: AlgorithmResult,
}

impl BenchmarkResult {
    pub fn new(
        name: impl Into<String>,
        board_size: usize,
        seed: u64,
        hill_climbing: AlgorithmResult,
        min_conflicts: AlgorithmResult,
    ) -> Self {
        Self {
            name: name.into(),
            board_size,
            seed,
            hill_climbing,
            min_conflicts,
        }
    }

    /// Returns the number of completed trials.
    pub fn trial_count(&self) -> usize {
        self.hill_climbing.run_count()
    }

    /// Returns both algorithm results in report order.
    pub fn algorithms(&self) -> [&AlgorithmResult; 2] {
        [&self.hill_climbing, &self.min_conflicts]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_test::boards::{plateau_8, solved_8};

    fn run(trial_index: usize, termination: Termination, iterations: u64, millis: u64) -> TrialRun {
        let final_board = match termination {
            Termination::Solved => solved_8(),
            _ => plateau_8(),
        };
        TrialRun {
            trial_index,
            initial_collisions: 10,
            outcome: SearchOutcome {
                termination,
                iterations,
                collisions: final_board.collisions(),
                moves_evaluated: iterations * 56,
            },
            solve_time: Duration::from_millis(millis),
            final_board,
        }
    }

    #[test]
    fn test_empty_result() {
        let result = AlgorithmResult::new("HC");
        assert_eq!(result.run_count(), 0);
        assert_eq!(result.success_rate(), 0.0);
        assert_eq!(result.avg_search_cost(), 0.0);
        assert_eq!(result.avg_solve_time(), Duration::ZERO);
        assert_eq!(result.avg_moves_per_second(), 0.0);
        assert!(result.first_solution().is_none());
    }

    #[test]
    fn test_termination_counts() {
        let mut result = AlgorithmResult::new("HC");
        result.add_run(run(0, Termination::Solved, 4, 10));
        result.add_run(run(1, Termination::Plateau, 2, 10));
        result.add_run(run(2, Termination::Plateau, 3, 10));
        result.add_run(run(3, Termination::IterationLimit, 1000, 10));

        assert_eq!(result.success_count(), 1);
        assert_eq!(result.plateau_count(), 2);
        assert_eq!(result.iteration_limit_count(), 1);
        assert_eq!(result.success_rate(), 0.25);
    }

    #[test]
    fn test_costs_and_times() {
        let mut result = AlgorithmResult::new("MC");
        result.add_run(run(0, Termination::Solved, 10, 100));
        result.add_run(run(1, Termination::Solved, 20, 200));

        assert_eq!(result.total_search_cost(), 30);
        assert_eq!(result.avg_search_cost(), 15.0);
        assert_eq!(result.total_solve_time(), Duration::from_millis(300));
        assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_mean_duration_with_count_above_u32() {
        let count = u32::MAX as usize + 2;
        let total = Duration::from_secs(count as u64);
        assert_eq!(mean_duration(total, count), Duration::from_secs(1));
        assert_eq!(mean_duration(total, 0), Duration::ZERO);
    }

    #[test]
    fn test_moves_per_second() {
        let r = run(0, Termination::Solved, 10, 2000);
        assert!((r.moves_per_second() - 280.0).abs() < 1e-9);

        let instant = run(0, Termination::Solved, 10, 0);
        assert_eq!(instant.moves_per_second(), 0.0);
    }

    #[test]
    fn test_first_solution_skips_failures() {
        let mut result = AlgorithmResult::new("HC");
        result.add_run(run(0, Termination::Plateau, 2, 1));
        result.add_run(run(1, Termination::Solved, 5, 1));

        assert_eq!(result.first_solution(), Some(&solved_8()));
    }
}
