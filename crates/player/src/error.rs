use std::path::PathBuf;

use chess_core::{FenError, MoveError, PositionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("strength {0} out of range, expected 1..=10")]
    Strength(u8),
}

#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("bad start position: {0}")]
    Fen(#[from] FenError),
    #[error("bad start position: {0}")]
    Position(#[from] PositionError),
    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}
