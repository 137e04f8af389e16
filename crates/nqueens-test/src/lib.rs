//! Shared test fixtures for the N-Queens crates.
//!
//! This crate provides known boards and seeded random sources for testing.
//!
//! - [`boards`] - solved boards, plateaus and deterministic descent paths
//! - [`seeded_rng`] - reproducible random source
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! nqueens-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use nqueens_test::boards::{plateau_8, solved_4};
//! use nqueens_test::seeded_rng;
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod boards;

pub use boards::board;

/// Returns a deterministic random source for the given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
