pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod status;
pub mod time_control;
pub mod transition;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::{evaluate, piece_value, square_bonus};
pub use game::Game;
pub use notation::{parse_coordinate_move, parse_move};
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use status::*;
pub use time_control::*;
pub use transition::*;
pub use types::*;

/// Standard starting position, White to move.
pub fn new_game() -> GameState {
    GameState::new_game()
}

// =============================================================================
// Engine trait, implemented by every move-selection strategy
// =============================================================================

/// Score magnitude of a checkmate seen at the root; mates found deeper score
/// `MATE_SCORE - ply` so shorter mates are preferred.
pub const MATE_SCORE: i32 = 1_000_000;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns from the side-to-move's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a position with no legal moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all move-selection strategies implement.
///
/// Implementations search a private copy of the state; the caller's
/// `GameState` is never modified.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `state` - The current position to analyze
    /// * `limits` - Search limits (depth, time, rollouts)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &GameState, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for logs and game records
    fn name(&self) -> &str;
}
