use super::book::OpeningBook;
use super::config::AIConfig;
use super::eval::{HeuristicEvaluator, OutcomeEvaluator};
use super::evaluator::Evaluator;
use super::search::{Decision, Scored, SearchStats};
use crate::core::{Board, Move, PlayerId, Score};
use crate::player::PlayerController;

use std::time::{Duration, Instant};

/// Alpha-beta search with an optional opening book and a root time budget.
///
/// The budget is only looked at between root moves. A root move that is slow
/// to evaluate runs to completion, so one call can overrun the budget by up
/// to the cost of a single root subtree.
pub struct AlphaBetaSearch<'e, E: Evaluator> {
    evaluator: &'e E,
    turn: PlayerId,
    book: Option<&'e OpeningBook>,
    time_budget: Duration,
    stats: SearchStats,
}

impl<'e, E: Evaluator> AlphaBetaSearch<'e, E> {
    pub fn new(evaluator: &'e E, turn: PlayerId) -> Self {
        Self {
            evaluator,
            turn,
            book: None,
            time_budget: Duration::MAX,
            stats: SearchStats::default(),
        }
    }

    pub fn with_book(mut self, book: &'e OpeningBook) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for `turn` looking `ply` moves ahead.
    ///
    /// Book positions return immediately. Otherwise every root move is searched
    /// with a full window, so the result is the exact minimax value and move,
    /// unless the time budget cut the root loop short.
    pub fn alpha_beta_move<B: Board>(&mut self, board: &B, ply: usize) -> Option<Decision> {
        self.stats = SearchStats::default();

        if let Some(mv) = self.book.and_then(|book| book.lookup(board, self.turn)) {
            return Some(Decision::Book(mv));
        }

        let start = Instant::now();
        if board.game_over() {
            return None;
        }
        let moves = board.legal_moves(self.turn);
        let first = *moves.first()?;

        if ply == 0 {
            let score = self.leaf(board);
            return Some(Decision::Searched(Scored { score, mv: first }));
        }

        let mut best = Scored {
            score: Score::NEG_INFINITY,
            mv: first,
        };
        let total = moves.len();
        for (i, mv) in moves.into_iter().enumerate() {
            let mut next_board = board.clone();
            next_board.make_move(self.turn, mv);
            let s = self.value(
                &next_board,
                ply - 1,
                self.turn.opponent(),
                false,
                Score::NEG_INFINITY,
                Score::INFINITY,
            );
            if s > best.score {
                best = Scored { score: s, mv };
            }
            self.stats.root_moves += 1;

            if i + 1 < total && start.elapsed() >= self.time_budget {
                self.stats.timed_out = true;
                tracing::warn!(
                    player = %self.turn,
                    searched = self.stats.root_moves,
                    total,
                    "time budget exhausted, returning best move so far"
                );
                break;
            }
        }

        self.stats.elapsed = start.elapsed();
        Some(Decision::Searched(best))
    }

    /// Alpha-beta value of `board` with `actor` to move.
    fn value<B: Board>(
        &mut self,
        board: &B,
        ply: usize,
        actor: PlayerId,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
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
            let mut next_board = board.clone();
            next_board.make_move(actor, mv);
            let s = self.value(&next_board, ply - 1, actor.opponent(), !maximizing, alpha, beta);

            if maximizing {
                if s > score {
                    score = s;
                    if score > beta {
                        return score; // fail high
                    }
                }
                alpha = alpha.max(score);
            } else {
                if s < score {
                    score = s;
                    if score < alpha {
                        return score; // fail low
                    }
                }
                beta = beta.min(score);
            }
        }
        score
    }

    fn leaf<B: Board>(&mut self, board: &B) -> Score {
        self.stats.leaves += 1;
        self.evaluator.evaluate(board, self.turn)
    }
}

/// One-call form without book or budget, comparable with `minimax_move`.
pub fn alpha_beta_move<B: Board, E: Evaluator>(
    board: &B,
    player: PlayerId,
    ply: usize,
    evaluator: &E,
) -> (Option<Scored>, SearchStats) {
    let mut search = AlphaBetaSearch::new(evaluator, player);
    let result = search.alpha_beta_move(board, ply).map(|decision| match decision {
        Decision::Searched(scored) => scored,
        Decision::Book(mv) => Scored {
            score: Score::INFINITY,
            mv,
        },
    });
    (result, search.stats)
}

pub struct AlphaBetaAI<E: Evaluator = OutcomeEvaluator> {
    player_id: PlayerId,
    name: String,
    ply: usize,
    evaluator: E,
    time_budget: Duration,
    use_book: bool,
}

impl AlphaBetaAI<OutcomeEvaluator> {
    pub fn new(player_id: PlayerId, name: &str, ply: usize) -> Self {
        let search = &AIConfig::get().search;
        Self {
            player_id,
            name: name.to_string(),
            ply,
            evaluator: OutcomeEvaluator,
            time_budget: search.time_budget(),
            use_book: search.opening_book,
        }
    }
}

impl AlphaBetaAI<HeuristicEvaluator> {
    /// The strongest player: heuristic evaluation at the configured custom depth.
    pub fn custom(player_id: PlayerId, name: &str) -> Self {
        let search = &AIConfig::get().search;
        Self {
            player_id,
            name: name.to_string(),
            ply: search.custom_ply,
            evaluator: HeuristicEvaluator,
            time_budget: search.time_budget(),
            use_book: search.opening_book,
        }
    }
}

impl<E: Evaluator> AlphaBetaAI<E> {
    pub fn with_ply(mut self, ply: usize) -> Self {
        self.ply = ply;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_book(mut self, enabled: bool) -> Self {
        self.use_book = enabled;
        self
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Runs the search and returns the full decision with its statistics.
    pub fn decide<B: Board>(&self, board: &B) -> (Option<Decision>, SearchStats) {
        let mut search = AlphaBetaSearch::new(&self.evaluator, self.player_id)
            .with_time_budget(self.time_budget);
        if self.use_book {
            search = search.with_book(OpeningBook::standard());
        }
        let decision = search.alpha_beta_move(board, self.ply);
        (decision, search.stats)
    }
}

impl<B: Board, E: Evaluator> PlayerController<B> for AlphaBetaAI<E> {
    fn choose_move(&self, board: &B) -> Option<Move> {
        let (decision, stats) = self.decide(board);
        tracing::debug!(
            player = %self.player_id,
            evaluator = self.evaluator.name(),
            ply = self.ply,
            nodes = stats.nodes,
            leaves = stats.leaves,
            root_moves = stats.root_moves,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "alpha-beta search finished"
        );
        let decision = decision?;
        tracing::info!(
            player = %self.player_id,
            mv = decision.mv(),
            score = decision.score(),
            book = decision.is_book(),
            "{} chose move",
            self.name
        );
        Some(decision.mv())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MancalaBoard, PITS};
    use crate::player::ai::minimax::minimax_move;

    #[test]
    fn test_book_hit_skips_search() {
        let board = MancalaBoard::new();
        let mut search = AlphaBetaSearch::new(&OutcomeEvaluator, PlayerId::Player1)
            .with_book(OpeningBook::standard());
        let decision = search.alpha_beta_move(&board, 6);
        assert_eq!(decision, Some(Decision::Book(3)));
        assert_eq!(decision.map(|d| d.score()), Some(f64::INFINITY));
        assert_eq!(search.stats().nodes, 0);
        assert_eq!(search.stats().leaves, 0);
    }

    #[test]
    fn test_matches_minimax_at_initial_position() {
        let board = MancalaBoard::new();
        for ply in 1..=4 {
            let (ab, _) = alpha_beta_move(&board, PlayerId::Player1, ply, &HeuristicEvaluator);
            let (mm, _) = minimax_move(&board, PlayerId::Player1, ply, &HeuristicEvaluator);
            assert_eq!(ab, mm, "ply {}", ply);
        }
    }

    #[test]
    fn test_prunes_at_ply_four() {
        let board = MancalaBoard::new();
        let (_, ab) = alpha_beta_move(&board, PlayerId::Player1, 4, &HeuristicEvaluator);
        let (_, mm) = minimax_move(&board, PlayerId::Player1, 4, &HeuristicEvaluator);
        assert_eq!(mm.leaves, 964);
        assert_eq!(ab.leaves, 860);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = MancalaBoard::from_parts([0; PITS], [2; PITS], [24, 12]);
        let (result, _) = alpha_beta_move(&board, PlayerId::Player2, 4, &OutcomeEvaluator);
        assert_eq!(result, None);
    }

    #[test]
    fn test_zero_budget_searches_one_root_move() {
        let board = MancalaBoard::from_parts([3, 0, 5, 1, 0, 2], [1, 4, 0, 2, 6, 1], [9, 14]);
        let mut search = AlphaBetaSearch::new(&HeuristicEvaluator, PlayerId::Player1)
            .with_time_budget(Duration::ZERO);
        let decision = search.alpha_beta_move(&board, 5).unwrap();
        assert_eq!(decision.mv(), 1);
        assert_eq!(search.stats().root_moves, 1);
        assert!(search.stats().timed_out);
    }

    #[test]
    fn test_budget_does_not_interrupt_a_root_branch() {
        // The first root subtree is always finished, even past the budget
        let board = MancalaBoard::new();
        let mut search = AlphaBetaSearch::new(&HeuristicEvaluator, PlayerId::Player1)
            .with_time_budget(Duration::from_nanos(1));
        let decision = search.alpha_beta_move(&board, 6).unwrap();
        assert!(!decision.is_book());
        assert_eq!(search.stats().root_moves, 1);
        assert!(search.stats().leaves > 1);
        assert!(search.stats().elapsed >= Duration::from_nanos(1));
    }

    #[test]
    fn test_custom_player_uses_book_then_search() {
        let ai = AlphaBetaAI::custom(PlayerId::Player1, "Custom AI")
            .with_ply(3)
            .with_book(true);
        let (decision, _) = ai.decide(&MancalaBoard::new());
        assert_eq!(decision, Some(Decision::Book(3)));

        let board = MancalaBoard::from_parts([3, 0, 5, 1, 0, 2], [1, 4, 0, 2, 6, 1], [9, 14]);
        let (decision, stats) = ai.decide(&board);
        assert!(matches!(decision, Some(Decision::Searched(_))));
        assert!(stats.leaves > 0);
    }
}
