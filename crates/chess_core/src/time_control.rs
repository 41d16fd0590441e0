//! Time control and search limits for chess engines.
//!
//! This module provides shared budget handling for every search strategy.
//! The clock is polled once per expanded node; once the budget is spent the
//! controller latches into the stopped state and the search degrades to the
//! best answer it already has. There is no external cancel signal.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default number of random playouts per root move for Monte Carlo search.
pub const DEFAULT_SIMULATIONS: u32 = 30;
/// Default length of a random playout in plies.
pub const DEFAULT_PLAYOUT_PLIES: u16 = 20;

/// Search limits that control how much work an engine may do.
///
/// Depth bounds the tree searchers, `simulations`/`playout_plies` bound the
/// rollout searcher, and `move_time` bounds all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Random playouts per root move
    pub simulations: u32,
    /// Maximum plies in one random playout
    pub playout_plies: u16,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            simulations: DEFAULT_SIMULATIONS,
            playout_plies: DEFAULT_PLAYOUT_PLIES,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::depth(depth)
        }
    }

    /// Create limits with only time constraint (infinite depth).
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(u8::MAX, move_time)
    }

    /// Rollout budget for Monte Carlo search.
    pub fn with_rollouts(mut self, simulations: u32, playout_plies: u16) -> Self {
        self.simulations = simulations;
        self.playout_plies = playout_plies;
        self
    }

    /// Start the clock for one search. Call this when search begins.
    pub fn start_clock(&self) -> TimeControl {
        TimeControl::new(self.move_time)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Single-search time controller.
///
/// Owned by one search call; each search starts its own.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Latched once the limit has been observed
    stopped: Cell<bool>,
    /// Start time of the search
    start_time: Instant,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Create a time controller whose clock starts now.
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Cell::new(false),
            start_time: Instant::now(),
            time_limit,
        }
    }

    /// Controller that never expires.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    /// Whether the search has already been told to stop.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Check the clock and latch the stopped flag if time expired.
    ///
    /// Called once per expanded node.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.start_time.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
