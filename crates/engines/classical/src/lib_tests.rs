use super::*;
use chess_core::{legal_moves, Square};
use std::time::Duration;

fn fen(text: &str) -> GameState {
    GameState::from_fen(text).unwrap()
}

#[test]
fn alpha_beta_returns_legal_move() {
    let mut engine = AlphaBetaEngine::with_seed(7);
    let state = GameState::new_game();
    let result = engine.search(&state, &SearchLimits::depth(3));

    let mv = result.best_move.unwrap();
    assert!(legal_moves(&state).contains(&mv));
    assert_eq!(result.depth, 3);
    assert!(!result.stopped);
    assert!(result.nodes > 0);
}

#[test]
fn alpha_beta_same_seed_same_choice() {
    let state = GameState::new_game();
    let limits = SearchLimits::depth(2);
    let a = AlphaBetaEngine::with_seed(42).search(&state, &limits);
    let b = AlphaBetaEngine::with_seed(42).search(&state, &limits);
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
}

#[test]
fn alpha_beta_tie_break_spreads_over_equal_moves() {
    // every king step is equally good here: bare kings
    let state = fen("8/8/8/4k3/8/8/8/K7 w - - 0 1");
    let mut seen = std::collections::HashSet::new();
    for seed in 0..32 {
        let mut engine = AlphaBetaEngine::with_seed(seed);
        let result = engine.search(&state, &SearchLimits::depth(1));
        seen.insert(result.best_move.unwrap());
    }
    assert!(seen.len() > 1);
}

#[test]
fn alpha_beta_zero_budget_still_moves() {
    let mut engine = AlphaBetaEngine::with_seed(1);
    let state = GameState::new_game();
    let limits = SearchLimits::depth_and_time(6, Duration::ZERO);
    let result = engine.search(&state, &limits);

    assert!(result.best_move.is_some());
    assert!(result.stopped);
    assert_eq!(result.depth, 1);
}

#[test]
fn alpha_beta_finds_mate_for_black() {
    let state = fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1");
    let mut engine = AlphaBetaEngine::with_seed(3);
    let result = engine.search(&state, &SearchLimits::depth(2));
    assert_eq!(
        result.best_move,
        Some(chess_core::Move::new(Square::new(7, 4), Square::new(0, 4)))
    );
    assert_eq!(result.score, chess_core::MATE_SCORE - 1);
}

#[test]
fn engines_handle_checkmate_and_stalemate() {
    let mated = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b - - 0 4");
    let stalemate = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    for state in [mated, stalemate] {
        let ab = AlphaBetaEngine::with_seed(0).search(&state, &SearchLimits::depth(2));
        assert!(ab.best_move.is_none());
        let nm = NegamaxEngine::new().search(&state, &SearchLimits::depth(2));
        assert!(nm.best_move.is_none());
    }
}

#[test]
fn negamax_takes_free_queen() {
    let state = fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let mut engine = NegamaxEngine::new();
    let result = engine.search(&state, &SearchLimits::depth(2));
    assert_eq!(
        result.best_move,
        Some(chess_core::Move::new(Square::new(1, 3), Square::new(4, 3)))
    );
    assert!(result.score > 0);
}
