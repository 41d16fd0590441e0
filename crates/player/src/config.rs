//! TOML configuration for a self-play game.
//!
//! ```toml
//! max_plies = 200
//!
//! [white]
//! strategy = "alpha-beta"
//! strength = 5
//!
//! [black]
//! strategy = "monte-carlo"
//! strength = 3
//! overrides = { simulations = 50, seed = 7 }
//! ```
//!
//! Every field has a default, so an empty file is a valid config.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strategy::{Strategy, StrategyParams, MAX_STRENGTH, MIN_STRENGTH};

/// Per-field replacements applied on top of the strength mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamOverrides {
    pub max_depth: Option<u8>,
    /// 0 disables the clock
    pub time_limit_ms: Option<u64>,
    pub simulations: Option<u32>,
    pub playout_plies: Option<u16>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideConfig {
    pub strategy: Strategy,
    pub strength: u8,
    pub overrides: ParamOverrides,
}

impl Default for SideConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            strength: 3,
            overrides: ParamOverrides::default(),
        }
    }
}

impl SideConfig {
    /// Strength mapping with the overrides applied.
    pub fn params(&self) -> StrategyParams {
        let mut params = StrategyParams::from_strength(self.strength);
        let o = &self.overrides;
        if let Some(depth) = o.max_depth {
            params.max_depth = depth;
        }
        if let Some(ms) = o.time_limit_ms {
            params.time_limit = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(sims) = o.simulations {
            params.simulations = sims;
        }
        if let Some(plies) = o.playout_plies {
            params.playout_plies = plies;
        }
        params.seed = o.seed.or(params.seed);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Game is adjourned after this many plies
    pub max_plies: u32,
    /// Start position; the standard one when absent
    pub start_fen: Option<String>,
    pub white: SideConfig,
    pub black: SideConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            start_fen: None,
            white: SideConfig::default(),
            black: SideConfig::default(),
        }
    }
}

impl PlayerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for side in [&self.white, &self.black] {
            if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&side.strength) {
                return Err(ConfigError::Strength(side.strength));
            }
        }
        Ok(())
    }

    pub fn side(&self, color: chess_core::Color) -> &SideConfig {
        match color {
            chess_core::Color::White => &self.white,
            chess_core::Color::Black => &self.black,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
