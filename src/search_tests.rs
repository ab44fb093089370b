//! Properties that tie the two searches, the book and the agents together.

use crate::core::{Board, MancalaBoard, PlayerId};
use crate::player::ai::alpha_beta::alpha_beta_move;
use crate::player::ai::minimax::minimax_move;
use crate::player::ai::{Evaluator, HeuristicEvaluator, OpeningBook, OutcomeEvaluator};
use crate::player::{PlayerAgent, PlayerController, StrategyKind};
use proptest::prelude::*;

/// Plays `choices` from the start position, each one picking a legal move by
/// index. Returns the board and the player to move.
fn reachable(choices: &[usize]) -> (MancalaBoard, PlayerId) {
    let mut board = MancalaBoard::new();
    let mut player = PlayerId::Player1;
    for &choice in choices {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        if !board.make_move(player, mv) {
            player = player.opponent();
        }
    }
    (board, player)
}

fn assert_same_result<E: Evaluator>(board: &MancalaBoard, evaluator: &E) -> Result<(), TestCaseError> {
    for player in [PlayerId::Player1, PlayerId::Player2] {
        for ply in 1..=4 {
            let (mm, mm_stats) = minimax_move(board, player, ply, evaluator);
            let (ab, ab_stats) = alpha_beta_move(board, player, ply, evaluator);
            prop_assert_eq!(mm, ab, "{} ply {} {}", player, ply, evaluator.name());
            prop_assert!(ab_stats.leaves <= mm_stats.leaves);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alpha_beta_agrees_with_minimax(choices in prop::collection::vec(0usize..6, 0..40)) {
        let (board, _) = reachable(&choices);
        assert_same_result(&board, &OutcomeEvaluator)?;
        assert_same_result(&board, &HeuristicEvaluator)?;
    }

    #[test]
    fn chosen_move_is_legal(choices in prop::collection::vec(0usize..6, 0..40), ply in 0usize..4) {
        let (board, player) = reachable(&choices);
        let (result, _) = alpha_beta_move(&board, player, ply, &HeuristicEvaluator);
        match result {
            Some(scored) => {
                prop_assert!(board.is_legal_move(player, scored.mv));
            }
            None => {
                prop_assert!(board.game_over());
            }
        }
    }

    #[test]
    fn stones_are_conserved(choices in prop::collection::vec(0usize..6, 0..80)) {
        let (board, _) = reachable(&choices);
        prop_assert_eq!(board.total_stones(), 48);
    }
}

#[test]
fn test_ties_keep_the_first_move() {
    // Nobody can finish within two plies, so every line scores 50
    let board = MancalaBoard::from_parts([0, 5, 5, 5, 5, 4], [4; 6], [0, 0]);
    let (mm, _) = minimax_move(&board, PlayerId::Player1, 2, &OutcomeEvaluator);
    let (ab, _) = alpha_beta_move(&board, PlayerId::Player1, 2, &OutcomeEvaluator);
    for scored in [mm, ab] {
        let scored = scored.unwrap();
        assert_eq!(scored.mv, 2);
        assert_eq!(scored.score, 50.0);
    }
}

#[test]
fn test_book_skips_search_at_any_depth() {
    // A real search this deep would not finish
    let agent = PlayerAgent::<MancalaBoard>::new(PlayerId::Player1, StrategyKind::AlphaBeta, 60);
    let board = MancalaBoard::new();
    assert_eq!(agent.choose_move(&board), OpeningBook::standard().lookup(&board, PlayerId::Player1));
    assert_eq!(agent.choose_move(&board), Some(3));
}

#[test]
fn test_agents_leave_the_board_alone() {
    let (board, player) = reachable(&[2, 0, 3, 1, 4, 5, 0, 2]);
    let before = board.clone();
    for strategy in [
        StrategyKind::Random,
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::Custom,
    ] {
        let agent = PlayerAgent::<MancalaBoard>::new(player, strategy, 3);
        let mv = agent.choose_move(&board);
        assert!(mv.is_some_and(|mv| board.is_legal_move(player, mv)), "{}", strategy);
        assert_eq!(board, before, "{}", strategy);
    }
}

#[test]
fn test_no_move_once_the_game_is_over() {
    let board = MancalaBoard::from_parts([0; 6], [1, 0, 0, 0, 0, 0], [23, 24]);
    for strategy in [StrategyKind::Random, StrategyKind::Minimax, StrategyKind::AlphaBeta] {
        for player in [PlayerId::Player1, PlayerId::Player2] {
            let agent = PlayerAgent::<MancalaBoard>::new(player, strategy, 2);
            assert_eq!(agent.choose_move(&board), None, "{} {}", strategy, player);
        }
    }
}
