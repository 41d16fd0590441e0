//! Strategy selection and the difficulty mapping.

use std::fmt;
use std::time::Duration;

use chess_core::{Engine, GameState, Move, PieceKind, SearchLimits, DEFAULT_PLAYOUT_PLIES};
use classical_engine::{AlphaBetaEngine, NegamaxEngine};
use clap::ValueEnum;
use montecarlo_engine::MonteCarloEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 10;

/// Deepest fixed depth handed to negamax; a full tree deeper than this does
/// not finish inside the strength-mapped time budgets.
pub const NEGAMAX_MAX_DEPTH: u8 = 4;

/// The three interchangeable move-selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Iterative-deepening alpha-beta with random tie-break
    #[default]
    AlphaBeta,
    /// Fixed-depth negamax
    Negamax,
    /// Flat Monte Carlo playouts
    MonteCarlo,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Negamax => "negamax",
            Strategy::MonteCarlo => "monte-carlo",
        };
        f.write_str(name)
    }
}

/// Knobs for one `select_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyParams {
    /// Deepest iteration for alpha-beta, exact depth for negamax
    pub max_depth: u8,
    /// Wall-clock budget for the whole call (None = unlimited)
    pub time_limit: Option<Duration>,
    /// Playouts per root move (Monte Carlo)
    pub simulations: u32,
    /// Plies per playout (Monte Carlo)
    pub playout_plies: u16,
    /// Seed for tie-breaks and playouts; fresh entropy when None
    pub seed: Option<u64>,
}

impl StrategyParams {
    /// Maps the 1..=10 difficulty knob onto search parameters.
    ///
    /// depth = strength + 2, time = 1000 + 300 * strength ms,
    /// simulations = 10 * strength. Out-of-range strengths are clamped.
    pub fn from_strength(strength: u8) -> Self {
        let s = strength.clamp(MIN_STRENGTH, MAX_STRENGTH);
        Self {
            max_depth: s + 2,
            time_limit: Some(Duration::from_millis(1000 + 300 * s as u64)),
            simulations: 10 * s as u32,
            playout_plies: DEFAULT_PLAYOUT_PLIES,
            seed: None,
        }
    }

    /// Search limits for `strategy`; negamax depth is capped at
    /// `NEGAMAX_MAX_DEPTH`.
    pub fn limits_for(&self, strategy: Strategy) -> SearchLimits {
        let depth = match strategy {
            Strategy::Negamax => self.max_depth.min(NEGAMAX_MAX_DEPTH),
            Strategy::AlphaBeta | Strategy::MonteCarlo => self.max_depth,
        };
        let limits = match self.time_limit {
            Some(time) => SearchLimits::depth_and_time(depth, time),
            None => SearchLimits::depth(depth),
        };
        limits.with_rollouts(self.simulations, self.playout_plies)
    }
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self::from_strength(3)
    }
}

/// Builds the engine behind `strategy`.
pub fn create_engine(strategy: Strategy, seed: Option<u64>) -> Box<dyn Engine> {
    match (strategy, seed) {
        (Strategy::AlphaBeta, Some(seed)) => Box::new(AlphaBetaEngine::with_seed(seed)),
        (Strategy::AlphaBeta, None) => Box::new(AlphaBetaEngine::new()),
        (Strategy::Negamax, _) => Box::new(NegamaxEngine::new()),
        (Strategy::MonteCarlo, Some(seed)) => Box::new(MonteCarloEngine::with_seed(seed)),
        (Strategy::MonteCarlo, None) => Box::new(MonteCarloEngine::new()),
    }
}

/// Chooses a move for the side to move in `state`.
///
/// Returns `None` only when that side has no legal move. While a promotion
/// is pending the answer is the queen completion on the pending square.
/// `state` is never modified; the engines search their own copy.
///
/// # Panics
/// If `state` fails `GameState::validate`, e.g. a side with two kings.
pub fn select_move(state: &GameState, strategy: Strategy, params: &StrategyParams) -> Option<Move> {
    state.assert_valid();
    if let Some(sq) = state.pending_promotion {
        debug!(%sq, "completing pending promotion");
        return Some(Move::with_promotion(sq, sq, PieceKind::Queen));
    }

    let mut engine = create_engine(strategy, params.seed);
    let result = engine.search(state, &params.limits_for(strategy));
    match result.best_move {
        Some(mv) => info!(
            engine = engine.name(),
            side = %state.side_to_move,
            %mv,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            stopped = result.stopped,
            "move selected"
        ),
        None => debug!(engine = engine.name(), "no legal move"),
    }
    result.best_move
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
