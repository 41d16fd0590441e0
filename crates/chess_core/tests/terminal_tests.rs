//! End-of-game detection through the public API.
//!
//! Covers checkmate, stalemate, insufficient material and plain check.

use chess_core::{
    Color, GameState, GameStatus, MoveError, PieceKind, Square, apply_move,
    is_insufficient_material, legal_moves, status,
};

fn fen(text: &str) -> GameState {
    GameState::from_fen(text).unwrap()
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let state = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&state).is_empty());
    assert_eq!(status(&state), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let state = fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&state).is_empty());
    assert_eq!(status(&state), GameStatus::Stalemate);
}

#[test]
fn test_stalemated_side_cannot_move() {
    let mut state = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let a8 = Square::new(7, 0);
    let b8 = Square::new(7, 1);
    assert_eq!(apply_move(&mut state, a8, b8, None), Err(MoveError::GameOver));
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_lone_minor() {
    for text in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
    ] {
        let state = fen(text);
        assert!(is_insufficient_material(&state), "{text}");
        assert_eq!(status(&state), GameStatus::DrawInsufficientMaterial);
    }
}

#[test]
fn test_one_minor_each_is_a_draw() {
    // bishop colours are not considered
    assert!(is_insufficient_material(&fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1")));
    assert!(is_insufficient_material(&fen("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1")));
}

#[test]
fn test_sufficient_material() {
    for text in [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        assert!(!is_insufficient_material(&fen(text)), "{text}");
    }
}

#[test]
fn test_capture_into_bare_kings_ends_game() {
    let mut state = fen("8/8/4k3/8/4r3/4K3/8/8 w - - 0 1");
    let report = apply_move(&mut state, Square::new(2, 4), Square::new(3, 4), None).unwrap();
    assert_eq!(report.captured.map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(report.status, GameStatus::DrawInsufficientMaterial);
}

// =============================================================================
// Check and mate
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let state = fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b - - 0 4");
    assert_eq!(
        status(&state),
        GameStatus::Checkmate {
            loser: Color::Black
        }
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let state = fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b - - 1 2");
    assert_eq!(status(&state), GameStatus::Check(Color::Black));
    assert_eq!(legal_moves(&state).len(), 1);
}
