//! Local search engine for N-Queens.
//!
//! Two heuristics operate on a [`Board`](nqueens_core::Board) in place:
//!
//! - [`SteepestHillClimbing`]: evaluates every single-queen move, applies a
//!   random one among those tied for the lowest collision count, and stops
//!   at a solution or a plateau.
//! - [`MinConflicts`]: repeatedly relocates a randomly chosen queen to its
//!   least-conflicting row until the board is solved or the iteration
//!   limit is hit.
//!
//! Randomness is injected: every search takes `&mut R where R: Rng`, so a
//! seeded generator makes runs reproducible.
//!
//! # Example
//!
//! ```
//! use nqueens_core::Board;
//! use nqueens_solver::{min_conflicts, Termination};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let mut board = Board::new(vec![0, 1, 2, 3]).unwrap();
//!
//! let outcome = min_conflicts(&mut board, &mut rng);
//! assert!(outcome.iterations <= 1000);
//! if outcome.termination == Termination::Solved {
//!     assert!(board.is_solution());
//! }
//! ```

pub mod heuristic;
pub mod phase;
pub mod result;

pub use heuristic::forager::TieBreakForager;
pub use heuristic::r#move::QueenMove;
pub use phase::hill_climbing::{steepest_hill_climbing, SteepestHillClimbing};
pub use phase::min_conflicts::{min_conflicts, MinConflicts};
pub use phase::LocalSearch;
pub use result::{SearchOutcome, Termination};
