use super::*;
use chess_core::{Square, MATE_SCORE};

fn fen(text: &str) -> GameState {
    GameState::from_fen(text).unwrap()
}

#[test]
fn test_pick_best_move_start_position() {
    let state = GameState::new_game();
    let mut nodes = 0;
    let tc = TimeControl::unlimited();
    let result = pick_best_move(&state, 3, &mut nodes, &tc);
    assert!(result.best_move.is_some());
    assert!(!result.stopped);
    assert!(nodes > 0);
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    let state = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut nodes = 0;
    let tc = TimeControl::unlimited();
    let (mv, score) = pick_best_move(&state, 2, &mut nodes, &tc).best_move.unwrap();
    assert_eq!(mv, Move::new(Square::new(0, 4), Square::new(7, 4)));
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_prefers_nearer_mate() {
    // mate now beats mate later: at depth 3 a slower mate would score lower
    let state = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut nodes = 0;
    let tc = TimeControl::unlimited();
    let (_, score) = pick_best_move(&state, 3, &mut nodes, &tc).best_move.unwrap();
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_stalemating_move_scores_zero() {
    // K+Q vs K where Qb6 would stalemate; at depth 1 the queen still looks
    // better than a draw
    let state = fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1");
    let mut nodes = 0;
    let tc = TimeControl::unlimited();
    let (mv, score) = pick_best_move(&state, 1, &mut nodes, &tc).best_move.unwrap();
    assert_ne!(mv, Move::new(Square::new(4, 1), Square::new(5, 1)));
    assert!(score > 0);
}

#[test]
fn test_no_legal_moves() {
    let state = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let mut nodes = 0;
    let result = pick_best_move(&state, 3, &mut nodes, &TimeControl::unlimited());
    assert!(result.best_move.is_none());
}
