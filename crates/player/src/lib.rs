//! Automated players for chess_core games.
//!
//! This crate provides:
//! - `select_move`: one entry point over the three search strategies
//! - `StrategyParams::from_strength`: the difficulty knob (1..=10)
//! - TOML configuration for both sides of a game
//! - An engine-vs-engine self-play driver with a printable game record
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta (strength 5) against Monte Carlo (strength 3)
//! cargo run -p player --bin selfplay -- --white alpha-beta --white-strength 5 \
//!     --black monte-carlo --black-strength 3 --json
//!
//! # Both sides from a config file
//! cargo run -p player --bin selfplay -- --config selfplay.toml
//! ```

mod config;
mod error;
mod record;
mod selfplay;
mod strategy;

pub use config::*;
pub use error::*;
pub use record::*;
pub use selfplay::*;
pub use strategy::*;
