//! Benchmark errors.

use nqueens_config::ConfigError;
use nqueens_core::NQueensError;
use thiserror::Error;

/// Errors raised while configuring, running or exporting a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Board error: {0}")]
    Board(#[from] NQueensError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
