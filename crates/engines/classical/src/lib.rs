//! Classical Chess Engines
//!
//! Two tree searches over the material plus piece-square evaluation:
//! - `AlphaBetaEngine`: iterative deepening, White-maximising minimax with
//!   alpha-beta pruning and a random pick among equally scored root moves
//! - `NegamaxEngine`: the same pruned search written as negamax, fixed depth,
//!   deterministic
//!
//! Both score checkmate as `MATE_SCORE - ply` and draws as 0, and both report
//! scores from the side-to-move's perspective.

mod eval;
pub mod negamax;
pub mod search;

use chess_core::{Engine, GameState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Iterative-deepening alpha-beta engine.
///
/// This engine uses:
/// - Depth 1, 2, ... up to `SearchLimits::depth`, stopping early once the
///   move time is spent
/// - Minimax with alpha-beta pruning, White maximising
/// - A uniform random choice among root moves tied for the best score
/// - A time check at every node, falling back to the static evaluation
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    /// Node counter for statistics
    nodes: u64,
    rng: StdRng,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a reproducible tie-break sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &GameState, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let tc = limits.start_clock();
        let max_depth = limits.depth.max(1);

        let mut result = SearchResult::no_move();
        for depth in 1..=max_depth {
            if depth > 1 && tc.check_time() {
                result.stopped = true;
                break;
            }

            let outcome = search::score_root_moves(state, depth, &mut self.nodes, &tc);
            let tied = outcome.best_moves();
            // an empty list means no legal moves, which no deeper search changes
            let Some(&choice) = tied.choose(&mut self.rng) else {
                break;
            };
            let score = outcome.best_score().unwrap_or(0);
            debug!(
                depth,
                score,
                tied = tied.len(),
                scored = outcome.scored.len(),
                nodes = self.nodes,
                elapsed_ms = tc.elapsed().as_millis() as u64,
                "depth finished"
            );

            result = SearchResult {
                best_move: Some(choice),
                score,
                depth,
                nodes: self.nodes,
                stopped: outcome.stopped,
            };
            if outcome.stopped {
                break;
            }
        }

        result.nodes = self.nodes;
        result
    }

    fn name(&self) -> &str {
        "AlphaBeta ID"
    }
}

/// Fixed-depth negamax engine.
///
/// Searches exactly `SearchLimits::depth` plies (or less if the move time
/// runs out) and returns the first move reaching the best score.
#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for NegamaxEngine {
    fn search(&mut self, state: &GameState, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let tc = limits.start_clock();
        let depth = limits.depth.max(1);

        let outcome = negamax::pick_best_move(state, depth, &mut self.nodes, &tc);
        debug!(
            depth,
            nodes = self.nodes,
            stopped = outcome.stopped,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            "negamax finished"
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}

#[cfg(test)]
mod lib_tests;
