use super::*;
use chess_core::Square;

fn sample() -> GameRecord {
    GameRecord {
        white: "alpha-beta (strength 2)".to_string(),
        black: "negamax (strength 2)".to_string(),
        start_fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1".to_string(),
        moves: ["f2f3", "e7e5", "g2g4", "d8h4"].map(String::from).to_vec(),
        outcome: GameOutcome::BlackWins,
        final_fen: "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 0 1".to_string(),
    }
}

#[test]
fn test_outcome_from_status() {
    assert_eq!(
        GameOutcome::from_status(GameStatus::Checkmate { loser: Color::White }),
        Some(GameOutcome::BlackWins)
    );
    assert_eq!(
        GameOutcome::from_status(GameStatus::DrawInsufficientMaterial),
        Some(GameOutcome::InsufficientMaterial)
    );
    assert_eq!(GameOutcome::from_status(GameStatus::Check(Color::Black)), None);
    assert_eq!(
        GameOutcome::from_status(GameStatus::AwaitingPromotion(Square::new(7, 0))),
        None
    );
}

#[test]
fn test_scores() {
    assert_eq!(GameOutcome::WhiteWins.score(), "1-0");
    assert_eq!(GameOutcome::Stalemate.score(), "1/2-1/2");
    assert_eq!(GameOutcome::PlyLimit.score(), "*");
}

#[test]
fn test_json_output() {
    let text = sample().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["outcome"], "black_wins");
    assert_eq!(value["moves"][3], "d8h4");
    assert_eq!(value["white"], "alpha-beta (strength 2)");
}

#[test]
fn test_report_lists_moves_in_pairs() {
    let report = sample().generate_report();
    assert!(report.contains("0-1"));
    assert!(report.contains("  1. f2f3   e7e5"));
    assert!(report.contains("  2. g2g4   d8h4"));
}
