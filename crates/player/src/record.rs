//! In-memory game records and their reports

use serde::Serialize;

use chess_core::{Color, GameStatus};

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    InsufficientMaterial,
    /// Stopped at the configured ply cap
    PlyLimit,
}

impl GameOutcome {
    /// Outcome for a terminal status, `None` while the game is still on.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Checkmate { loser: Color::Black } => Some(GameOutcome::WhiteWins),
            GameStatus::Checkmate { loser: Color::White } => Some(GameOutcome::BlackWins),
            GameStatus::Stalemate => Some(GameOutcome::Stalemate),
            GameStatus::DrawInsufficientMaterial => Some(GameOutcome::InsufficientMaterial),
            GameStatus::Ongoing | GameStatus::Check(_) | GameStatus::AwaitingPromotion(_) => None,
        }
    }

    /// Result in the usual score notation; an adjourned game reads `*`.
    pub fn score(self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Stalemate | GameOutcome::InsufficientMaterial => "1/2-1/2",
            GameOutcome::PlyLimit => "*",
        }
    }
}

/// A finished (or adjourned) self-play game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Player labels, e.g. `alpha-beta (strength 5)`
    pub white: String,
    pub black: String,
    pub start_fen: String,
    /// Coordinate notation, one entry per accepted move
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub final_fen: String,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// The record as pretty-printed JSON, for piping to other tools
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n\n", self.white, self.black));
        report.push_str(&format!("Start: {}\n", self.start_fen));
        report.push_str(&format!(
            "Result: {} ({:?}) after {} plies\n\n",
            self.outcome.score(),
            self.outcome,
            self.plies()
        ));

        for (n, pair) in self.moves.chunks(2).enumerate() {
            let black = pair.get(1).map(String::as_str).unwrap_or("");
            report.push_str(&format!("{:>3}. {:<6} {}\n", n + 1, pair[0], black));
        }
        report.push_str(&format!("\nFinal: {}\n", self.final_fen));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
