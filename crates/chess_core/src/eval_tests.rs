use super::*;

fn fen(text: &str) -> GameState {
    GameState::from_fen(text).unwrap()
}

/// Swaps colours and mirrors ranks, so the position is the same game seen
/// from the other side.
fn color_flip(state: &GameState) -> GameState {
    let mut out = GameState::empty(state.side_to_move.other());
    for (sq, pc) in state.occupied() {
        out.set_piece(
            Square::new(7 - sq.row, sq.col),
            Some(Piece::new(pc.color.other(), pc.kind)),
        );
    }
    out
}

#[test]
fn test_start_position_is_balanced() {
    assert_eq!(evaluate(&GameState::new_game()), 0);
}

#[test]
fn test_mirrored_position_negates_score() {
    for text in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w - f6 0 3",
    ] {
        let s = fen(text);
        assert_eq!(evaluate(&color_flip(&s)), -evaluate(&s), "{text}");
    }
}

#[test]
fn test_material_sign() {
    // White is a queen up
    let up = fen("3qk3/8/8/8/8/8/8/2QQK3 w - - 0 1");
    assert!(evaluate(&up) > 800);
    // Black is a rook up
    let down = fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(evaluate(&down) < -400);
}

#[test]
fn test_score_ignores_side_to_move() {
    let w = fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let b = fen("r3k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(evaluate(&w), evaluate(&b));
}

#[test]
fn test_square_bonus_is_mirrored_for_black() {
    let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    // one step from promotion is worth the most
    assert_eq!(square_bonus(white_pawn, Square::new(6, 3)), 50);
    assert_eq!(square_bonus(black_pawn, Square::new(1, 3)), 50);
    // untouched centre pawns are nudged forward
    assert_eq!(square_bonus(white_pawn, Square::new(1, 4)), -20);
    assert_eq!(square_bonus(black_pawn, Square::new(6, 4)), -20);

    let knight = Piece::new(Color::White, PieceKind::Knight);
    assert!(square_bonus(knight, Square::new(3, 3)) > square_bonus(knight, Square::new(0, 0)));
    assert_eq!(square_bonus(Piece::new(Color::Black, PieceKind::King), Square::new(7, 4)), 0);
}

#[test]
fn test_piece_values_keep_classic_ratios() {
    assert_eq!(piece_value(PieceKind::Pawn), 100);
    assert_eq!(piece_value(PieceKind::Knight), piece_value(PieceKind::Bishop));
    assert_eq!(piece_value(PieceKind::Rook), 500);
    assert_eq!(piece_value(PieceKind::Queen), 900);
    assert!(piece_value(PieceKind::King) > 9 * piece_value(PieceKind::Queen));
}
