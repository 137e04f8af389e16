//! Core types for N-Queens local search.
//!
//! This crate provides:
//! - [`Board`]: one queen per column, the row is the only free coordinate
//! - [`collisions`]: the objective function, counting attacking queen pairs
//! - [`NQueensError`]: construction errors
//!
//! # Example
//!
//! ```
//! use nqueens_core::{collisions, Board};
//!
//! let board = Board::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(collisions(&board), 0);
//! assert!(board.is_solution());
//! ```

pub mod board;
pub mod collision;
pub mod error;

pub use board::Board;
pub use collision::{collisions, collisions_after, pair_attacks};
pub use error::{NQueensError, Result};
