//! # Evaluation Module
//!
//! Static evaluation functions for Mancala boards.
//!
//! ## Outcome evaluator
//! Looks only at the result of the game: 100 for a win, 0 for a loss and 50 for
//! anything else. Plain minimax and alpha-beta players use it as a baseline.
//!
//! ## Heuristic evaluator
//! Used by the custom player. The score is composed of:
//! 1. **Store difference**: own store minus the opponent's.
//! 2. **Distance from defeat**: `25 - opponent store`. 25 stones out of 48 is
//!    an outright majority, so this shrinks as the opponent closes in.
//! 3. **Extra-turn multiplier**: ×1.5 for every own pit whose stones would end
//!    exactly in the store. Applied once per pit and compounded, so two such
//!    pits weigh ×2.25 rather than ×2.

use super::evaluator::Evaluator;
use crate::core::{Board, PlayerId, Score};

pub const WIN_SCORE: Score = 100.0;
pub const LOSS_SCORE: Score = 0.0;
pub const UNDECIDED_SCORE: Score = 50.0;

/// Stones needed for a majority of the 48 on the board
const MAJORITY: f64 = 25.0;
const EXTRA_TURN_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeEvaluator;

impl Evaluator for OutcomeEvaluator {
    fn evaluate<B: Board>(&self, board: &B, perspective: PlayerId) -> Score {
        if board.has_won(perspective) {
            WIN_SCORE
        } else if board.has_won(perspective.opponent()) {
            LOSS_SCORE
        } else {
            UNDECIDED_SCORE
        }
    }

    fn name(&self) -> &str {
        "outcome"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl Evaluator for HeuristicEvaluator {
    fn evaluate<B: Board>(&self, board: &B, perspective: PlayerId) -> Score {
        let own = board.store(perspective) as f64;
        let theirs = board.store(perspective.opponent()) as f64;

        let mut score = (own - theirs) + (MAJORITY - theirs);

        let pits = board.pits(perspective);
        for (i, &stones) in pits.iter().enumerate() {
            // i 番目のピットからストアまでの距離
            let to_store = (pits.len() - i) as u32;
            if stones == to_store {
                score *= EXTRA_TURN_MULTIPLIER;
            }
        }

        score
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MancalaBoard, PITS};

    #[test]
    fn test_outcome_scores() {
        let board = MancalaBoard::new();
        assert_eq!(OutcomeEvaluator.evaluate(&board, PlayerId::Player1), UNDECIDED_SCORE);

        let finished = MancalaBoard::from_parts([0; PITS], [0; PITS], [30, 18]);
        assert_eq!(OutcomeEvaluator.evaluate(&finished, PlayerId::Player1), WIN_SCORE);
        assert_eq!(OutcomeEvaluator.evaluate(&finished, PlayerId::Player2), LOSS_SCORE);

        let tied = MancalaBoard::from_parts([0; PITS], [0; PITS], [24, 24]);
        assert_eq!(OutcomeEvaluator.evaluate(&tied, PlayerId::Player1), UNDECIDED_SCORE);
        assert_eq!(OutcomeEvaluator.evaluate(&tied, PlayerId::Player2), UNDECIDED_SCORE);
    }

    #[test]
    fn test_outcome_range_over_a_game() {
        let mut board = MancalaBoard::new();
        let mut player = PlayerId::Player1;
        while let Some(&mv) = board.legal_moves(player).first() {
            for p in [PlayerId::Player1, PlayerId::Player2] {
                let s = OutcomeEvaluator.evaluate(&board, p);
                assert!([LOSS_SCORE, UNDECIDED_SCORE, WIN_SCORE].contains(&s));
            }
            if !board.make_move(player, mv) {
                player = player.opponent();
            }
        }
    }

    #[test]
    fn test_heuristic_base_score() {
        let board = MancalaBoard::from_parts([1, 1, 1, 1, 1, 0], [7; PITS], [10, 6]);
        // (10 - 6) + (25 - 6)
        assert_eq!(HeuristicEvaluator.evaluate(&board, PlayerId::Player1), 23.0);
        // (6 - 10) + (25 - 10)
        assert_eq!(HeuristicEvaluator.evaluate(&board, PlayerId::Player2), 11.0);
    }

    #[test]
    fn test_heuristic_compounds_multiplier() {
        let none = MancalaBoard::from_parts([0, 0, 0, 0, 0, 0], [2; PITS], [4, 2]);
        // Pit 1 needs 6 stones and pit 6 needs 1 to reach the store
        let two = MancalaBoard::from_parts([6, 0, 0, 0, 0, 1], [2; PITS], [4, 2]);

        let base = HeuristicEvaluator.evaluate(&none, PlayerId::Player1);
        let boosted = HeuristicEvaluator.evaluate(&two, PlayerId::Player1);
        assert_eq!(base, 25.0);
        assert_eq!(boosted, base * 1.5 * 1.5);
        assert_ne!(boosted, base * (1.0 + 0.5 + 0.5));
    }

    #[test]
    fn test_heuristic_counts_only_own_pits() {
        let board = MancalaBoard::from_parts([0; PITS], [6, 5, 4, 3, 2, 1], [0, 0]);
        assert_eq!(HeuristicEvaluator.evaluate(&board, PlayerId::Player1), 25.0);
        assert_eq!(
            HeuristicEvaluator.evaluate(&board, PlayerId::Player2),
            25.0 * 1.5f64.powi(6)
        );
    }
}
