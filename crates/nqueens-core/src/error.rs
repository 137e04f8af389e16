//! Error types for nqueens-core

use thiserror::Error;

/// Main error type for board construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NQueensError {
    /// A board must hold at least one queen.
    #[error("Board must have at least one column")]
    EmptyBoard,

    /// A queen was placed outside the board.
    #[error("Row {row} of column {column} is out of range for a board of size {size}")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, NQueensError>;
