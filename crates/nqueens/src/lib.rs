//! N-Queens local search in Rust.
//!
//! Place N queens on an N×N board, one per column, and drive the number of
//! attacking pairs to zero with steepest hill climbing or min-conflicts.
//!
//! # Example
//!
//! ```rust
//! use nqueens::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let mut board = Board::random(8, &mut rng).unwrap();
//!
//! let outcome = min_conflicts(&mut board, &mut rng);
//! assert_eq!(outcome.collisions, board.collisions());
//! if outcome.is_success() {
//!     assert!(board.is_solution());
//! }
//! ```

// Board model and collision evaluation
pub use nqueens_core::{collisions, collisions_after, pair_attacks, Board, NQueensError};

// Searches
pub use nqueens_solver::{
    min_conflicts, steepest_hill_climbing, LocalSearch, MinConflicts, SearchOutcome,
    SteepestHillClimbing, Termination,
};

// Configuration
pub use nqueens_config::{ConfigError, NQueensConfig};

// Benchmark harness and reports
pub use nqueens_benchmark::{
    AlgorithmResult, Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, CsvReport,
    MarkdownReport, SummaryReport, TrialRun,
};

#[cfg(feature = "console")]
pub use nqueens_console as console;

/// Lower-level search building blocks.
pub mod heuristic {
    pub use nqueens_solver::{QueenMove, TieBreakForager};
}

pub mod prelude {
    pub use super::{collisions, Board};
    pub use super::{min_conflicts, steepest_hill_climbing, LocalSearch, MinConflicts};
    pub use super::{SearchOutcome, SteepestHillClimbing, Termination};
    pub use super::{Benchmark, BenchmarkConfig, NQueensConfig, SummaryReport};
}
