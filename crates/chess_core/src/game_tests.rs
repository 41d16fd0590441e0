use super::*;
use crate::notation::parse_move;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut Game, text: &str) -> MoveReport {
    let mv = parse_move(game.state(), text).unwrap();
    game.play_move(mv).unwrap()
}

#[test]
fn test_new_game_session() {
    let game = Game::new();
    assert_eq!(game.state(), &GameState::new_game());
    assert!(game.moves().is_empty());
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    for text in ["f2f3", "e7e5", "g2g4"] {
        play(&mut game, text);
    }
    let report = play(&mut game, "d8h4");
    assert_eq!(
        report.status,
        GameStatus::Checkmate {
            loser: Color::White
        }
    );
    assert_eq!(game.moves().len(), 4);
    assert_eq!(
        game.play(sq("a2"), sq("a3"), None),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_captures_are_tracked_and_undone() {
    let mut game = Game::new();
    for text in ["e2e4", "d7d5"] {
        play(&mut game, text);
    }
    let report = play(&mut game, "e4d5");
    assert_eq!(
        report.captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(game.captured_by(Color::White).len(), 1);
    assert!(game.captured_by(Color::Black).is_empty());

    assert!(game.undo());
    assert!(game.captured_by(Color::White).is_empty());
    assert_eq!(game.moves().len(), 2);
    assert_eq!(game.state().piece_at(sq("e4")).map(|p| p.kind), Some(PieceKind::Pawn));

    assert!(game.undo());
    assert!(game.undo());
    assert_eq!(game.state(), &GameState::new_game());
    assert!(!game.undo());
}

#[test]
fn test_rejected_move_leaves_history_alone() {
    let mut game = Game::new();
    play(&mut game, "e2e4");
    let before = game.state().clone();
    assert!(game.play(sq("e4"), sq("e5"), None).is_err());
    assert_eq!(game.state(), &before);
    assert_eq!(game.moves().len(), 1);
}

#[test]
fn test_pending_promotion_through_session() {
    let state = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let mut game = Game::from_state(state).unwrap();
    let report = game.play(sq("e7"), sq("e8"), None).unwrap();
    assert_eq!(report.status, GameStatus::AwaitingPromotion(sq("e8")));
    game.play(sq("e8"), sq("e8"), Some(PieceKind::Queen)).unwrap();
    assert_eq!(game.state().side_to_move, Color::Black);
    assert_eq!(game.moves().len(), 2);

    // one undo per accepted request
    assert!(game.undo());
    assert_eq!(game.state().pending_promotion, Some(sq("e8")));
}

#[test]
fn test_from_state_validates() {
    let mut state = GameState::empty(Color::White);
    state.put(sq("e1"), Piece::new(Color::White, PieceKind::King));
    assert_eq!(
        Game::from_state(state).unwrap_err(),
        PositionError::MissingKing {
            color: Color::Black
        }
    );
}
