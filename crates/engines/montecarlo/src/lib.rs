//! Flat Monte Carlo Chess Engine
//!
//! Scores each legal root move by the average static evaluation at the end
//! of a number of uniformly random playouts. No tree, no pruning: strength
//! comes from the simulation count rather than depth.

pub mod rollout;

use chess_core::{legal_moves_into, Engine, GameState, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};


/// Average playout result for one root move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveStats {
    pub mv: Move,
    /// Playouts run below this move
    pub playouts: u32,
    /// Mean White-positive evaluation at the playout ends
    pub mean: f64,
}

/// A chess engine that picks the root move with the best playout average.
///
/// White takes the highest White-positive mean, Black the lowest. The move
/// time is checked between playouts; the first root move always receives
/// at least one playout, and root moves reached after the budget is spent
/// are not considered.
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    nodes: u64,
    rng: StdRng,
}

impl MonteCarloEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with reproducible playouts.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Runs the playouts and returns per-move statistics in root order,
    /// plus whether the budget cut the run short.
    pub fn root_stats(
        &mut self,
        state: &GameState,
        limits: &SearchLimits,
    ) -> (Vec<MoveStats>, bool) {
        let tc = limits.start_clock();
        let mut tmp = state.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut tmp, &mut moves);

        let simulations = limits.simulations.max(1);
        let plies = limits.playout_plies;
        let mut stats = Vec::with_capacity(moves.len());
        let mut stopped = false;

        'root: for mv in moves {
            let undo = tmp.make_move(mv);
            self.nodes += 1;

            let mut total = 0i64;
            let mut playouts = 0u32;
            while playouts < simulations {
                if (playouts > 0 || !stats.is_empty()) && tc.check_time() {
                    stopped = true;
                    break;
                }
                total += rollout::playout(&mut tmp, plies, &mut self.rng, &mut self.nodes) as i64;
                playouts += 1;
            }
            tmp.unmake_move(mv, undo);

            if playouts > 0 {
                let mean = total as f64 / playouts as f64;
                trace!(%mv, playouts, mean, "root move sampled");
                stats.push(MoveStats { mv, playouts, mean });
            }
            if stopped {
                break 'root;
            }
        }

        (stats, stopped)
    }
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MonteCarloEngine {
    fn search(&mut self, state: &GameState, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let sign = state.side_to_move.sign() as f64;
        let (stats, stopped) = self.root_stats(state, limits);

        // strict comparison keeps the earliest of equal means
        let best = stats.iter().fold(None::<&MoveStats>, |best, s| match best {
            Some(b) if sign * s.mean <= sign * b.mean => Some(b),
            _ => Some(s),
        });

        let Some(best) = best else {
            return SearchResult::no_move();
        };
        debug!(
            best = %best.mv,
            mean = best.mean,
            sampled = stats.len(),
            nodes = self.nodes,
            stopped,
            "playouts finished"
        );

        SearchResult {
            best_move: Some(best.mv),
            score: (sign * best.mean).round() as i32,
            depth: 1,
            nodes: self.nodes,
            stopped,
        }
    }

    fn name(&self) -> &str {
        "Monte Carlo"
    }
}
