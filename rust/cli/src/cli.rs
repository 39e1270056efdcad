//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokersquares",
    version,
    about = "Poker Squares players and simulation tools"
)]
pub struct PokerSquaresCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Overrides shared by the commands that play games. Anything left unset
/// falls back to the resolved configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOptions {
    /// Player type (expectimax, random)
    #[arg(long)]
    pub player: Option<String>,
    /// Point system (american, british, random)
    #[arg(long)]
    pub system: Option<String>,
    /// Base RNG seed for deals and tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
    /// Expectimax search depth
    #[arg(long)]
    pub depth: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game and show every placement
    Play {
        #[command(flatten)]
        opts: GameOptions,
    },
    /// Play many games and summarize the scores
    Sim {
        #[arg(long)]
        games: u32,
        #[command(flatten)]
        opts: GameOptions,
        /// Append a JSONL record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Compare two players on identical deals
    Eval {
        #[arg(long)]
        player_a: String,
        #[arg(long)]
        player_b: String,
        #[arg(long)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        system: Option<String>,
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Score a completed grid given 25 cards in row-major order
    Score {
        #[arg(long)]
        cards: String,
        #[arg(long)]
        system: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
