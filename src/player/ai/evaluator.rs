//! Leaf scoring interface shared by both searches.

use crate::core::{Board, PlayerId, Score};

pub trait Evaluator: Send + Sync {
    /// Evaluate the board from `perspective`'s point of view.
    ///
    /// Higher is better for `perspective`. One search uses a single evaluator
    /// and a single perspective at every leaf, whoever is to move there.
    fn evaluate<B: Board>(&self, board: &B, perspective: PlayerId) -> Score;

    /// Short name for logs
    fn name(&self) -> &str;
}
