//! Report generation for benchmark results.
//!
//! Every report is a [`Display`](fmt::Display) adapter over a
//! [`BenchmarkResult`]; `to_string()` renders it and `write_to_file` stores it.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::result::{AlgorithmResult, BenchmarkResult};

/// Console summary: per algorithm a success rate, the search cost and the
/// total and average wall-clock time.
///
/// Trials that stopped without a solution are listed by reason, so an
/// exhausted iteration limit is never folded into the success rate.
///
/// # Example
///
/// ```
/// use nqueens_benchmark::{AlgorithmResult, BenchmarkResult, SummaryReport};
///
/// let result = BenchmarkResult::new(
///     "Test",
///     8,
///     42,
///     AlgorithmResult::new("Steepest Hill Climbing"),
///     AlgorithmResult::new("Min Conflicts"),
/// );
/// let text = SummaryReport::new(&result).to_string();
/// assert!(text.contains("Steepest Hill Climbing Algorithm:"));
/// assert!(text.contains("Min Conflicts Algorithm:"));
/// ```
pub struct SummaryReport<'a> {
    result: &'a BenchmarkResult,
}

impl<'a> SummaryReport<'a> {
    pub fn new(result: &'a BenchmarkResult) -> Self {
        Self { result }
    }

    fn write_algorithm(f: &mut fmt::Formatter<'_>, algorithm: &AlgorithmResult) -> fmt::Result {
        let trials = algorithm.run_count();
        writeln!(f, "{} Algorithm:", algorithm.algorithm)?;
        writeln!(f, "\t{:.1}% Success rate.", algorithm.success_rate() * 100.0)?;
        if algorithm.plateau_count() > 0 {
            writeln!(
                f,
                "\tStopped on a plateau: {} of {} trials.",
                algorithm.plateau_count(),
                trials
            )?;
        }
        if algorithm.iteration_limit_count() > 0 {
            writeln!(
                f,
                "\tIteration limit reached: {} of {} trials.",
                algorithm.iteration_limit_count(),
                trials
            )?;
        }
        writeln!(f, "\tSearch Costs: {:.2} moves.", algorithm.avg_search_cost())?;
        writeln!(
            f,
            "\tTotal Time:   {:.6} seconds.",
            algorithm.total_solve_time().as_secs_f64()
        )?;
        writeln!(
            f,
            "\tAverage Time: {:.6} seconds.",
            algorithm.avg_solve_time().as_secs_f64()
        )
    }

    /// Writes the summary to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.result.algorithms();
        Self::write_algorithm(f, first)?;
        writeln!(f)?;
        Self::write_algorithm(f, second)
    }
}

/// CSV exporter for benchmark results.
///
/// One row per trial per algorithm.
///
/// # Example
///
/// ```
/// use nqueens_benchmark::{AlgorithmResult, BenchmarkResult, CsvReport};
///
/// let result = BenchmarkResult::new(
///     "Test",
///     8,
///     42,
///     AlgorithmResult::new("HC"),
///     AlgorithmResult::new("MC"),
/// );
/// let csv = CsvReport::new(&result).to_string();
/// assert!(csv.starts_with("algorithm,trial_index,"));
/// ```
pub struct CsvReport<'a> {
    result: &'a BenchmarkResult,
}

impl<'a> CsvReport<'a> {
    pub fn new(result: &'a BenchmarkResult) -> Self {
        Self { result }
    }

    /// Writes the CSV to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for CsvReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "algorithm,trial_index,initial_collisions,termination,iterations,final_collisions,moves_evaluated,solve_time_us"
        )?;

        for algorithm in self.result.algorithms() {
            for run in &algorithm.runs {
                writeln!(
                    f,
                    "{},{},{},{},{},{},{},{}",
                    algorithm.algorithm,
                    run.trial_index,
                    run.initial_collisions,
                    run.outcome.termination,
                    run.outcome.iterations,
                    run.outcome.collisions,
                    run.outcome.moves_evaluated,
                    run.solve_time.as_micros(),
                )?;
            }
        }
        Ok(())
    }
}

/// Markdown report generator.
///
/// Produces a metadata header and a comparison table of both algorithms.
///
/// # Example
///
/// ```
/// use nqueens_benchmark::{AlgorithmResult, BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new(
///     "Test",
///     8,
///     42,
///     AlgorithmResult::new("HC"),
///     AlgorithmResult::new("MC"),
/// );
/// let md = MarkdownReport::new(&result).to_string();
/// assert!(md.contains("# Benchmark: Test"));
/// ```
pub struct MarkdownReport<'a> {
    result: &'a BenchmarkResult,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(result: &'a BenchmarkResult) -> Self {
        Self { result }
    }

    /// Writes the Markdown report to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "# Benchmark: {}", result.name)?;
        writeln!(f)?;
        writeln!(f, "- **Board size**: {}", result.board_size)?;
        writeln!(f, "- **Trials**: {}", result.trial_count())?;
        writeln!(f, "- **Seed**: {}", result.seed)?;
        writeln!(f)?;

        writeln!(f, "## Comparison")?;
        writeln!(f)?;
        if result.trial_count() == 0 {
            return writeln!(f, "*No trials completed.*");
        }

        writeln!(
            f,
            "| Algorithm | Success Rate | Plateaus | Iteration Limits | Avg Search Cost | Avg Time (ms) | Total Time (s) | Moves/sec |"
        )?;
        writeln!(
            f,
            "|-----------|--------------|----------|------------------|-----------------|---------------|----------------|-----------|"
        )?;
        for algorithm in result.algorithms() {
            writeln!(
                f,
                "| {} | {:.1}% | {} | {} | {:.2} | {:.3} | {:.3} | {:.0} |",
                algorithm.algorithm,
                algorithm.success_rate() * 100.0,
                algorithm.plateau_count(),
                algorithm.iteration_limit_count(),
                algorithm.avg_search_cost(),
                algorithm.avg_solve_time().as_secs_f64() * 1000.0,
                algorithm.total_solve_time().as_secs_f64(),
                algorithm.avg_moves_per_second(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TrialRun;
    use nqueens_solver::{SearchOutcome, Termination};
    use nqueens_test::boards::{plateau_8, solved_8};
    use std::time::Duration;

    fn trial(index: usize, termination: Termination, iterations: u64) -> TrialRun {
        let final_board = if termination == Termination::Solved {
            solved_8()
        } else {
            plateau_8()
        };
        TrialRun {
            trial_index: index,
            initial_collisions: 7,
            outcome: SearchOutcome {
                termination,
                iterations,
                collisions: final_board.collisions(),
                moves_evaluated: iterations * 7,
            },
            solve_time: Duration::from_millis(500),
            final_board,
        }
    }

    fn sample_result() -> BenchmarkResult {
        let mut hill = AlgorithmResult::new("Steepest Hill Climbing");
        hill.add_run(trial(0, Termination::Solved, 4));
        hill.add_run(trial(1, Termination::Plateau, 2));

        let mut mc = AlgorithmResult::new("Min Conflicts");
        mc.add_run(trial(0, Termination::Solved, 30));
        mc.add_run(trial(1, Termination::IterationLimit, 1000));

        BenchmarkResult::new("Sample", 8, 7, hill, mc)
    }

    #[test]
    fn test_summary_report() {
        let text = SummaryReport::new(&sample_result()).to_string();
        let expected = "\
Steepest Hill Climbing Algorithm:
\t50.0% Success rate.
\tStopped on a plateau: 1 of 2 trials.
\tSearch Costs: 3.00 moves.
\tTotal Time:   1.000000 seconds.
\tAverage Time: 0.500000 seconds.

Min Conflicts Algorithm:
\t50.0% Success rate.
\tIteration limit reached: 1 of 2 trials.
\tSearch Costs: 515.00 moves.
\tTotal Time:   1.000000 seconds.
\tAverage Time: 0.500000 seconds.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_csv_report_rows() {
        let csv = CsvReport::new(&sample_result()).to_string();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Steepest Hill Climbing,0,7,solved,4,0,28,500000");
        assert_eq!(lines[2], "Steepest Hill Climbing,1,7,plateau,2,1,14,500000");
        assert_eq!(lines[4], "Min Conflicts,1,7,iteration_limit,1000,1,7000,500000");
    }

    #[test]
    fn test_markdown_report() {
        let md = MarkdownReport::new(&sample_result()).to_string();

        assert!(md.contains("# Benchmark: Sample"));
        assert!(md.contains("- **Board size**: 8"));
        assert!(md.contains("- **Trials**: 2"));
        assert!(md.contains("- **Seed**: 7"));
        assert!(md.contains("| Steepest Hill Climbing | 50.0% | 1 | 0 | 3.00 | 500.000 | 1.000 | 42 |"));
        assert!(md.contains("| Min Conflicts | 50.0% | 0 | 1 | 515.00 | 500.000 | 1.000 | 7210 |"));
    }

    #[test]
    fn test_markdown_report_without_trials() {
        let result = BenchmarkResult::new(
            "Empty",
            4,
            0,
            AlgorithmResult::new("HC"),
            AlgorithmResult::new("MC"),
        );
        let md = MarkdownReport::new(&result).to_string();
        assert!(md.contains("*No trials completed.*"));
        assert!(!md.contains("| Algorithm |"));
    }
}
