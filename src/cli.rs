//! Command-line interface for tictactoe_solo.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::StrategyKind;

/// Tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_solo")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the computer waits before answering
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer strategy (heuristic or random)
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Let the computer open the first game
    #[arg(long)]
    pub computer_first: bool,

    /// Emit one JSON event per line instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the effective configuration: file (or defaults), then flags.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(ms) = self.think_delay_ms {
            config = config.with_think_delay_ms(ms);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if self.computer_first {
            config = config.with_human_first(false);
        }
        Ok(config)
    }
}
