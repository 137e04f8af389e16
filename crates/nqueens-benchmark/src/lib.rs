//! Benchmark harness for N-Queens local search.
//!
//! Runs steepest hill climbing and min-conflicts against fresh random
//! boards, collects per-trial outcomes and renders them as a console
//! summary, CSV or Markdown.
//!
//! # Overview
//!
//! - One random source per benchmark, seeded once; the seed is recorded in
//!   the result so any run can be replayed
//! - Each trial draws an independent random board for each algorithm
//! - Unsolved trials are split into plateaus and exhausted iteration limits
//!
//! # Example
//!
//! ```
//! use nqueens_benchmark::{Benchmark, BenchmarkConfig, SummaryReport};
//!
//! let config = BenchmarkConfig::new("8-Queens")
//!     .with_board_size(8)
//!     .with_trial_count(20)
//!     .with_random_seed(7);
//!
//! let result = Benchmark::new(config).run().unwrap();
//! assert_eq!(result.hill_climbing.run_count(), 20);
//! assert_eq!(result.min_conflicts.run_count(), 20);
//!
//! let summary = SummaryReport::new(&result).to_string();
//! assert!(summary.contains("Success rate."));
//! ```

mod config;
mod error;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use report::{CsvReport, MarkdownReport, SummaryReport};
pub use result::{AlgorithmResult, BenchmarkResult, TrialRun};
pub use runner::Benchmark;
