use crate::core::{Board, Move, PlayerId};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub player_id: PlayerId,
    pub name: String,
}

impl RandomAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        RandomAI {
            player_id,
            name: name.to_string(),
        }
    }
}

impl<B: Board> PlayerController<B> for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &B) -> Option<Move> {
        let mut rng = rand::thread_rng();
        let mv = board.legal_moves(self.player_id).choose(&mut rng).copied()?;
        tracing::info!(player = %self.player_id, mv, "{} chose move", self.name);
        Some(mv)
    }
}
