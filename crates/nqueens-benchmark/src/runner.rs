//! Benchmark runner.

use std::time::Instant;

use nqueens_core::Board;
use nqueens_solver::{LocalSearch, MinConflicts, SteepestHillClimbing};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::report::{CsvReport, MarkdownReport};
use crate::result::{AlgorithmResult, BenchmarkResult, TrialRun};

/// Trial harness comparing steepest hill climbing with min-conflicts.
///
/// A single random source is seeded once per benchmark and shared by board
/// generation and both searches. Each trial draws a fresh random board per
/// algorithm and runs the searches one after the other.
///
/// # Example
///
/// ```
/// use nqueens_benchmark::{Benchmark, BenchmarkConfig};
///
/// let config = BenchmarkConfig::new("Small")
///     .with_board_size(6)
///     .with_trial_count(5)
///     .with_random_seed(42);
///
/// let result = Benchmark::new(config).run().unwrap();
/// assert_eq!(result.trial_count(), 5);
/// assert_eq!(result.seed, 42);
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs all trials and returns aggregated results.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Board`] if the board size is zero.
    pub fn run(&self) -> Result<BenchmarkResult, BenchmarkError> {
        let config = &self.config;
        let seed = config.random_seed().unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            event = "benchmark_start",
            name = config.name(),
            board_size = config.board_size() as u64,
            trial_count = config.trial_count() as u64,
            seed = seed,
        );
        let start = Instant::now();

        let mut hill_climbing = SteepestHillClimbing::new();
        let mut min_conflicts = MinConflicts::new(config.iteration_limit());
        let mut hill_result = AlgorithmResult::new(hill_climbing.name());
        let mut min_conflicts_result = AlgorithmResult::new(min_conflicts.name());

        for trial_index in 0..config.trial_count() {
            let board = Board::random(config.board_size(), &mut rng)?;
            hill_result.add_run(run_trial(&mut hill_climbing, trial_index, board, &mut rng));

            let board = Board::random(config.board_size(), &mut rng)?;
            min_conflicts_result.add_run(run_trial(
                &mut min_conflicts,
                trial_index,
                board,
                &mut rng,
            ));
        }

        let result = BenchmarkResult::new(
            config.name(),
            config.board_size(),
            seed,
            hill_result,
            min_conflicts_result,
        );

        info!(
            event = "benchmark_end",
            name = config.name(),
            duration_ms = start.elapsed().as_millis() as u64,
            hill_climbing_solved = result.hill_climbing.success_count() as u64,
            min_conflicts_solved = result.min_conflicts.success_count() as u64,
            trial_count = result.trial_count() as u64,
        );

        Ok(result)
    }

    /// Writes the CSV and Markdown reports to the configured paths.
    ///
    /// Does nothing for paths that are not configured.
    pub fn export(&self, result: &BenchmarkResult) -> Result<(), BenchmarkError> {
        if let Some(path) = self.config.csv_output_path() {
            CsvReport::new(result).write_to_file(path)?;
            info!(event = "report_written", format = "csv", path = path);
        }
        if let Some(path) = self.config.markdown_output_path() {
            MarkdownReport::new(result).write_to_file(path)?;
            info!(event = "report_written", format = "markdown", path = path);
        }
        Ok(())
    }
}

/// Runs one search on `board` and times it.
fn run_trial<L, R>(search: &mut L, trial_index: usize, mut board: Board, rng: &mut R) -> TrialRun
where
    L: LocalSearch,
    R: Rng + ?Sized,
{
    let initial_collisions = board.collisions();

    let start = Instant::now();
    let outcome = search.solve(&mut board, rng);
    let solve_time = start.elapsed();

    debug!(
        event = "trial_end",
        algorithm = search.name(),
        trial = trial_index as u64,
        termination = outcome.termination.as_str(),
        iterations = outcome.iterations,
        collisions = outcome.collisions as u64,
        duration_us = solve_time.as_micros() as u64,
    );

    TrialRun {
        trial_index,
        initial_collisions,
        outcome,
        solve_time,
        final_board: board,
    }
}
