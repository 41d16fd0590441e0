//! Self-play driver for playing a game between two configured players

use chess_core::{Game, GameState};
use tracing::{info, warn};

use crate::config::{PlayerConfig, SideConfig};
use crate::error::SelfPlayError;
use crate::record::{GameOutcome, GameRecord};
use crate::strategy::select_move;

/// Plays one game between the two sides of a `PlayerConfig`
pub struct SelfPlay {
    config: PlayerConfig,
}

impl SelfPlay {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Play a single game to a terminal status or the ply cap.
    ///
    /// A configured seed is advanced by the ply number so consecutive
    /// searches do not replay the same random sequence.
    pub fn play_game(&self) -> Result<GameRecord, SelfPlayError> {
        let start = match &self.config.start_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };
        let start_fen = start.to_fen();
        let mut game = Game::from_state(start)?;

        let mut outcome = GameOutcome::from_status(game.status());
        let mut ply = 0u32;
        while outcome.is_none() && ply < self.config.max_plies {
            let side = game.state().side_to_move;
            let player = self.config.side(side);
            let mut params = player.params();
            params.seed = params.seed.map(|s| s.wrapping_add(ply as u64));

            let Some(mv) = select_move(game.state(), player.strategy, &params) else {
                // select_move only gives up when the status is already terminal
                warn!(%side, "no move available on a live position");
                break;
            };
            let report = game.play_move(mv)?;
            ply += 1;
            info!(ply, %side, mv = %report.mv, status = ?report.status, "move played");

            outcome = GameOutcome::from_status(report.status);
        }

        let outcome = outcome.unwrap_or(GameOutcome::PlyLimit);
        info!(result = outcome.score(), plies = ply, "game over");

        Ok(GameRecord {
            white: label(&self.config.white),
            black: label(&self.config.black),
            start_fen,
            moves: game.moves().iter().map(|mv| mv.to_string()).collect(),
            outcome,
            final_fen: game.state().to_fen(),
        })
    }
}

fn label(side: &SideConfig) -> String {
    format!("{} (strength {})", side.strategy, side.strength)
}

#[cfg(test)]
#[path = "selfplay_tests.rs"]
mod selfplay_tests;
