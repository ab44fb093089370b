pub mod record;

use crate::core::{Board, MancalaBoard, Move, PlayerId};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub use record::GameRecord;

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// One side ran out of stones
    Finished,
    /// The player returned no move
    Resigned(PlayerId),
    /// The player returned a move the board rejects
    IllegalMove(PlayerId, Move),
    MoveLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub end: GameEnd,
    pub moves: usize,
    pub stores: [u32; 2],
    pub time_ms: u128,
}

pub struct Game {
    pub board: MancalaBoard,
    pub current_player: PlayerId,
    pub history: Vec<(PlayerId, Move)>,
    pub max_moves: usize,
}

impl Game {
    pub fn new(board: MancalaBoard) -> Self {
        Game {
            board,
            current_player: PlayerId::Player1,
            history: Vec::new(),
            max_moves: usize::MAX,
        }
    }

    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn play(
        &mut self,
        p1: &dyn PlayerController<MancalaBoard>,
        p2: &dyn PlayerController<MancalaBoard>,
    ) -> GameResult {
        self.play_with(p1, p2, |_, _| {})
    }

    /// Runs the game to the end. `on_turn` sees the board before each move.
    ///
    /// A move that ends in the mover's own store is followed by another move
    /// from the same player.
    pub fn play_with<F>(
        &mut self,
        p1: &dyn PlayerController<MancalaBoard>,
        p2: &dyn PlayerController<MancalaBoard>,
        mut on_turn: F,
    ) -> GameResult
    where
        F: FnMut(&MancalaBoard, PlayerId),
    {
        let start = Instant::now();

        let end = loop {
            if self.board.game_over() {
                break GameEnd::Finished;
            }
            if self.history.len() >= self.max_moves {
                break GameEnd::MoveLimit;
            }

            let player = self.current_player;
            let controller = match player {
                PlayerId::Player1 => p1,
                PlayerId::Player2 => p2,
            };
            on_turn(&self.board, player);

            let Some(mv) = controller.choose_move(&self.board) else {
                tracing::info!(player = %player, "{} resigned", controller.name());
                break GameEnd::Resigned(player);
            };
            if !self.board.is_legal_move(player, mv) {
                tracing::warn!(player = %player, mv, "{} played an illegal move", controller.name());
                break GameEnd::IllegalMove(player, mv);
            }

            let again = self.board.make_move(player, mv);
            self.history.push((player, mv));
            if !again {
                self.current_player = player.opponent();
            }
        };

        let winner = match end {
            GameEnd::Finished => self.board.winner(),
            GameEnd::Resigned(p) | GameEnd::IllegalMove(p, _) => Some(p.opponent()),
            GameEnd::MoveLimit => None,
        };
        tracing::info!(?end, ?winner, moves = self.history.len(), "game over");

        GameResult {
            winner,
            end,
            moves: self.history.len(),
            stores: self.board.stores,
            time_ms: start.elapsed().as_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PITS;

    /// Plays a fixed list of moves, then resigns.
    struct Scripted {
        moves: std::cell::RefCell<Vec<Move>>,
    }

    impl Scripted {
        fn new(moves: &[Move]) -> Self {
            let mut moves = moves.to_vec();
            moves.reverse();
            Self {
                moves: std::cell::RefCell::new(moves),
            }
        }
    }

    impl PlayerController<MancalaBoard> for Scripted {
        fn choose_move(&self, _board: &MancalaBoard) -> Option<Move> {
            self.moves.borrow_mut().pop()
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_extra_turn_keeps_the_mover() {
        let p1 = Scripted::new(&[3, 6]);
        let p2 = Scripted::new(&[]);
        let mut game = Game::new(MancalaBoard::new());
        let mut turns = Vec::new();
        let result = game.play_with(&p1, &p2, |_, p| turns.push(p));

        assert_eq!(turns, vec![PlayerId::Player1, PlayerId::Player1, PlayerId::Player2]);
        assert_eq!(result.end, GameEnd::Resigned(PlayerId::Player2));
        assert_eq!(result.winner, Some(PlayerId::Player1));
        assert_eq!(game.history, vec![(PlayerId::Player1, 3), (PlayerId::Player1, 6)]);
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let p1 = Scripted::new(&[1]);
        let p2 = Scripted::new(&[1]);
        let board = MancalaBoard::from_parts([4; PITS], [0, 4, 4, 4, 4, 4], [4, 0]);
        let mut game = Game::new(board);
        let result = game.play(&p1, &p2);
        assert_eq!(result.end, GameEnd::IllegalMove(PlayerId::Player2, 1));
        assert_eq!(result.winner, Some(PlayerId::Player1));
        assert_eq!(result.moves, 1);
    }

    #[test]
    fn test_move_limit_is_a_draw() {
        let p1 = Scripted::new(&[1, 2]);
        let p2 = Scripted::new(&[1, 2]);
        let mut game = Game::new(MancalaBoard::new()).with_max_moves(2);
        let result = game.play(&p1, &p2);
        assert_eq!(result.end, GameEnd::MoveLimit);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_finished_game_reports_winner() {
        let board = MancalaBoard::from_parts([0, 0, 0, 0, 0, 1], [2, 3, 0, 0, 0, 0], [20, 22]);
        let p1 = Scripted::new(&[6]);
        let p2 = Scripted::new(&[]);
        let mut game = Game::new(board);
        let result = game.play(&p1, &p2);
        assert_eq!(result.end, GameEnd::Finished);
        assert_eq!(result.winner, Some(PlayerId::Player2));
        assert_eq!(result.stores, [21, 27]);
    }
}
