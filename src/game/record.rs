use super::GameResult;
use crate::core::{Board, MancalaBoard, Move, PlayerId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to replay a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub started_at: String,
    /// Player names, Player 1 first
    pub players: [String; 2],
    pub initial_board: MancalaBoard,
    pub moves: Vec<(PlayerId, Move)>,
    pub result: GameResult,
}

impl GameRecord {
    pub fn new(
        players: [String; 2],
        initial_board: MancalaBoard,
        moves: Vec<(PlayerId, Move)>,
        result: GameResult,
    ) -> Self {
        Self {
            started_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            players,
            initial_board,
            moves,
            result,
        }
    }

    /// Board after every recorded move, starting with the initial one.
    pub fn replay(&self) -> Vec<MancalaBoard> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial_board.clone();
        boards.push(board.clone());
        for &(player, mv) in &self.moves {
            board.make_move(player, mv);
            boards.push(board.clone());
        }
        boards
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::player::ai::{AlphaBetaAI, RandomAI};

    #[test]
    fn test_replay_reaches_final_board() {
        let p1 = AlphaBetaAI::new(PlayerId::Player1, "AB", 2);
        let p2 = RandomAI::new(PlayerId::Player2, "Random");
        let initial = MancalaBoard::new();
        let mut game = Game::new(initial.clone());
        let result = game.play(&p1, &p2);

        let record = GameRecord::new(
            ["AB".to_string(), "Random".to_string()],
            initial,
            game.history.clone(),
            result,
        );
        let boards = record.replay();
        assert_eq!(boards.len(), game.history.len() + 1);
        assert_eq!(boards.last(), Some(&game.board));
        assert!(game.board.game_over());
    }

    #[test]
    fn test_json_round_trip() {
        let p1 = RandomAI::new(PlayerId::Player1, "R1");
        let p2 = RandomAI::new(PlayerId::Player2, "R2");
        let mut game = Game::new(MancalaBoard::new());
        let result = game.play(&p1, &p2);
        let record = GameRecord::new(
            ["R1".to_string(), "R2".to_string()],
            MancalaBoard::new(),
            game.history.clone(),
            result,
        );

        let path = std::env::temp_dir().join(format!("mancala_record_{}.json", std::process::id()));
        record.save(&path).unwrap();
        let loaded = GameRecord::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, record);
    }
}
