//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use parlor_engine::rules::DealerStrategy;
use parlor_engine::scoring::ScoringScheme;

#[derive(Debug, Parser)]
#[command(
    name = "parlor",
    version,
    about = "Terminal Blackjack and Mad Libs",
    arg_required_else_help = true
)]
pub struct ParlorCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play Blackjack against the dealer
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Starting bankroll
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        chips: Option<u32>,
        #[arg(long, value_enum)]
        scoring: Option<ScoringArg>,
        #[arg(long, value_enum)]
        dealer: Option<DealerArg>,
        /// Append each settled round to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Deal one opening hand and show both values
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        scoring: Option<ScoringArg>,
    },
    /// Summarize a round history file
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Fill in a Mad Libs story
    Madlibs {
        /// Story id (see --list)
        #[arg(long)]
        story: Option<String>,
        /// Pre-fill a field, e.g. --set name=Riya
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// List available stories
        #[arg(long)]
        list: bool,
    },
    /// Show resolved configuration
    Cfg,
}

/// Scoring table selectable on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ScoringArg {
    /// Face cards 11/12/13, ace 14 (4 when reduced)
    Classic,
    /// Face cards 10, ace 11 (1 when reduced)
    Standard,
}

impl From<ScoringArg> for ScoringScheme {
    fn from(v: ScoringArg) -> Self {
        match v {
            ScoringArg::Classic => ScoringScheme::Classic,
            ScoringArg::Standard => ScoringScheme::Standard,
        }
    }
}

/// Dealer strategy selectable on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DealerArg {
    /// Hit until reaching the player's value
    MatchPlayer,
    /// Hit below 17
    #[value(name = "stand-on-17")]
    StandOn17,
}

impl From<DealerArg> for DealerStrategy {
    fn from(v: DealerArg) -> Self {
        match v {
            DealerArg::MatchPlayer => DealerStrategy::MatchPlayer,
            DealerArg::StandOn17 => DealerStrategy::StandOn17,
        }
    }
}
