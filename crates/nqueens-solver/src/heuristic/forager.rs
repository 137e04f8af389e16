//! Tie-break forager for move selection.
//!
//! The forager collects the moves evaluated during a step and keeps only
//! those tied for the lowest collision count. Picking draws uniformly among
//! the ties.

use rand::Rng;
use smallvec::SmallVec;

use super::r#move::QueenMove;

/// Collects the best moves of a step and picks one at random.
///
/// # Example
///
/// ```
/// use nqueens_solver::{QueenMove, TieBreakForager};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut forager = TieBreakForager::new();
/// forager.step_started();
/// forager.add_move(QueenMove::new(0, 1, 4));
/// forager.add_move(QueenMove::new(0, 2, 2));
/// forager.add_move(QueenMove::new(1, 0, 2));
///
/// assert_eq!(forager.best_collisions(), Some(2));
/// assert_eq!(forager.tie_count(), 2);
///
/// let picked = forager.pick_move(&mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(picked.collisions, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TieBreakForager {
    best_moves: SmallVec<[QueenMove; 16]>,
}

impl TieBreakForager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called at the start of each step to reset state.
    pub fn step_started(&mut self) {
        self.best_moves.clear();
    }

    /// Offers a move. It is kept only if no strictly better move was seen
    /// this step; a strictly better move evicts all previous ones.
    pub fn add_move(&mut self, m: QueenMove) {
        match self.best_collisions() {
            Some(best) if m.collisions > best => {}
            Some(best) if m.collisions < best => {
                self.best_moves.clear();
                self.best_moves.push(m);
            }
            _ => self.best_moves.push(m),
        }
    }

    /// Returns the lowest collision count offered this step.
    pub fn best_collisions(&self) -> Option<usize> {
        self.best_moves.first().map(|m| m.collisions)
    }

    /// Returns the number of moves tied at the lowest collision count.
    pub fn tie_count(&self) -> usize {
        self.best_moves.len()
    }

    /// Picks one of the tied moves uniformly at random.
    ///
    /// Returns None if no moves were offered.
    pub fn pick_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<QueenMove> {
        if self.best_moves.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.best_moves.len());
        Some(self.best_moves[index])
    }
}
