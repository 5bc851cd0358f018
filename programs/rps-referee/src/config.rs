//! Referee configuration from the command line

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rps_logic::{seed_from_u64, BotStrategy, Move};

#[derive(Parser, Debug)]
#[command(name = "rps-referee")]
#[command(about = "Referee a best-of-3 game of Rock-Paper-Scissors-Plus against a bot")]
pub struct Args {
    /// Bot seed (for reproducible games), fills the first 8 bytes of the 32-byte seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the bot picks its moves
    #[arg(long, value_enum, default_value = "random")]
    pub strategy: StrategyArg,

    /// Write the finished game as JSON to this path
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Random,
    Cycle,
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl From<StrategyArg> for BotStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => BotStrategy::Random,
            StrategyArg::Cycle => BotStrategy::Cycle,
            StrategyArg::Rock => BotStrategy::Fixed(Move::Rock),
            StrategyArg::Paper => BotStrategy::Fixed(Move::Paper),
            StrategyArg::Scissors => BotStrategy::Fixed(Move::Scissors),
            StrategyArg::Bomb => BotStrategy::Fixed(Move::Bomb),
        }
    }
}

/// Resolved settings for one referee session
#[derive(Clone, Debug)]
pub struct RefereeConfig {
    pub seed_value: u64,
    pub seed: [u8; 32],
    pub strategy: BotStrategy,
    pub transcript: Option<PathBuf>,
}

impl RefereeConfig {
    pub fn new(seed_value: u64, strategy: BotStrategy) -> Self {
        Self {
            seed_value,
            seed: seed_from_u64(seed_value),
            strategy,
            transcript: None,
        }
    }

    /// Build from parsed arguments, drawing a fresh seed when none was given
    pub fn from_args(args: &Args) -> Self {
        let seed_value = args.seed.unwrap_or_else(rand::random::<u64>);
        Self {
            transcript: args.transcript.clone(),
            ..Self::new(seed_value, args.strategy.into())
        }
    }
}
