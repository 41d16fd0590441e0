//! Self-play CLI
//!
//! Plays one engine-vs-engine game and prints its record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use player::{PlayerConfig, SelfPlay, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play an engine-vs-engine chess game", long_about = None)]
struct Args {
    /// TOML config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strategy for White
    #[arg(long, value_enum)]
    white: Option<Strategy>,

    /// Strategy for Black
    #[arg(long, value_enum)]
    black: Option<Strategy>,

    /// Difficulty for White (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    white_strength: Option<u8>,

    /// Difficulty for Black (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    black_strength: Option<u8>,

    /// Stop the game after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Start position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Seed both sides for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the game record as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> Result<(PlayerConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => PlayerConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PlayerConfig::default(),
        };

        if let Some(strategy) = self.white {
            config.white.strategy = strategy;
        }
        if let Some(strategy) = self.black {
            config.black.strategy = strategy;
        }
        if let Some(strength) = self.white_strength {
            config.white.strength = strength;
        }
        if let Some(strength) = self.black_strength {
            config.black.strength = strength;
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
        if self.fen.is_some() {
            config.start_fen = self.fen;
        }
        if let Some(seed) = self.seed {
            config.white.overrides.seed = Some(seed);
            // distinct stream for the second player
            config.black.overrides.seed = Some(seed ^ 0x9e37_79b9_7f4a_7c15);
        }

        Ok((config, self.json))
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (config, json) = Args::parse().into_config()?;

    let record = SelfPlay::new(config).play_game().context("self-play failed")?;
    if json {
        println!("{}", record.to_json().context("serialising the record")?);
    } else {
        record.print_report();
    }

    Ok(())
}
