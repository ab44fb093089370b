use super::eval::OutcomeEvaluator;
use super::evaluator::Evaluator;
use super::search::{Scored, SearchStats};
use crate::core::{Board, Move, PlayerId, Score};
use crate::player::PlayerController;
use std::time::Instant;

/// Plain minimax. Every leaf is scored from `turn`'s perspective.
pub struct MinimaxSearch<'e, E: Evaluator> {
    evaluator: &'e E,
    turn: PlayerId,
    stats: SearchStats,
}

impl<'e, E: Evaluator> MinimaxSearch<'e, E> {
    pub fn new(evaluator: &'e E, turn: PlayerId) -> Self {
        Self {
            evaluator,
            turn,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for `turn` looking `ply` moves ahead.
    ///
    /// `None` when the game is already over. At `ply == 0` the current board
    /// is scored and paired with the first legal move. Ties keep the earlier
    /// move.
    pub fn minimax_move<B: Board>(&mut self, board: &B, ply: usize) -> Option<Scored> {
        let start = Instant::now();
        self.stats = SearchStats::default();

        if board.game_over() {
            return None;
        }
        let moves = board.legal_moves(self.turn);
        let first = *moves.first()?;

        if ply == 0 {
            let score = self.leaf(board);
            return Some(Scored { score, mv: first });
        }

        let mut best = Scored {
            score: Score::NEG_INFINITY,
            mv: first,
        };
        for mv in moves {
            let mut next_board = board.clone();
            next_board.make_move(self.turn, mv);
            let s = self.value(&next_board, ply - 1, self.turn.opponent(), false);
            if s > best.score {
                best = Scored { score: s, mv };
            }
            self.stats.root_moves += 1;
        }

        self.stats.elapsed = start.elapsed();
        Some(best)
    }

    /// Minimax value of `board` with `actor` to move.
    fn value<B: Board>(&mut self, board: &B, ply: usize, actor: PlayerId, maximizing: bool) -> Score {
        self.stats.nodes += 1;
        if board.game_over() {
            return self.leaf(board);
        }

        let moves = board.legal_moves(actor);
        if ply == 0 || moves.is_empty() {
            return self.leaf(board);
        }

        let mut score = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };
        for mv in moves {
            // 盤面をコピーしてから指す
            let mut next_board = board.clone();
            next_board.make_move(actor, mv);
            let s = self.value(&next_board, ply - 1, actor.opponent(), !maximizing);
            if (maximizing && s > score) || (!maximizing && s < score) {
                score = s;
            }
        }
        score
    }

    fn leaf<B: Board>(&mut self, board: &B) -> Score {
        self.stats.leaves += 1;
        self.evaluator.evaluate(board, self.turn)
    }
}

/// One-call form of [`MinimaxSearch::minimax_move`].
pub fn minimax_move<B: Board, E: Evaluator>(
    board: &B,
    player: PlayerId,
    ply: usize,
    evaluator: &E,
) -> (Option<Scored>, SearchStats) {
    let mut search = MinimaxSearch::new(evaluator, player);
    let result = search.minimax_move(board, ply);
    (result, search.stats)
}

pub struct MinimaxAI {
    pub player_id: PlayerId,
    pub name: String,
    pub ply: usize,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str, ply: usize) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            ply,
        }
    }
}

impl<B: Board> PlayerController<B> for MinimaxAI {
    fn choose_move(&self, board: &B) -> Option<Move> {
        let (result, stats) = minimax_move(board, self.player_id, self.ply, &OutcomeEvaluator);
        tracing::debug!(
            player = %self.player_id,
            nodes = stats.nodes,
            leaves = stats.leaves,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "minimax search finished"
        );
        let Scored { score, mv } = result?;
        tracing::info!(player = %self.player_id, mv, score, "{} chose move", self.name);
        Some(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
