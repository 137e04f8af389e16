//! Moves and move selection shared by both searches.

pub mod forager;
pub mod r#move;
