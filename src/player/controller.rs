use crate::core::{Board, Move};

/// Move selection capability shared by every strategy.
pub trait PlayerController<B: Board> {
    /// `None` means the player cannot or will not move (finished game,
    /// closed input, invalid configuration).
    fn choose_move(&self, board: &B) -> Option<Move>;
    fn name(&self) -> &str;
}
