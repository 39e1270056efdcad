//! Command handler modules for the pokersquares CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod eval;
pub mod play;
pub mod score;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use score::handle_score_command;
pub use sim::handle_sim_command;

use pokersquares_ai::create_player;
use pokersquares_engine::player::SquaresPlayer;

use crate::cli::GameOptions;
use crate::config::{self, Config};
use crate::error::CliError;

/// Load the layered configuration and apply command-line overrides on top.
pub(crate) fn resolve_config(opts: &GameOptions) -> Result<Config, CliError> {
    let mut cfg = config::load_with_sources()?.config;
    if let Some(player) = &opts.player {
        cfg.player = player.clone();
    }
    if let Some(system) = &opts.system {
        cfg.point_system = system.clone();
        cfg.point_table = None;
    }
    if let Some(seed) = opts.seed {
        cfg.seed = Some(seed);
    }
    if let Some(depth) = opts.depth {
        cfg.depth_limit = depth;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub(crate) fn build_player(
    name: &str,
    depth: u32,
    seed: u64,
) -> Result<Box<dyn SquaresPlayer>, CliError> {
    create_player(name, depth, seed)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown player: {}", name)))
}

/// Score statistics over a batch of games.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreSummary {
    pub games: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: i32,
    pub max: i32,
}

impl ScoreSummary {
    pub fn from_scores(scores: &[i32]) -> Option<Self> {
        let min = *scores.iter().min()?;
        let max = *scores.iter().max()?;
        let n = scores.len() as f64;
        let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
        let var = scores
            .iter()
            .map(|&s| (f64::from(s) - mean).powi(2))
            .sum::<f64>()
            / n;
        Some(Self {
            games: scores.len(),
            mean,
            std_dev: var.sqrt(),
            min,
            max,
        })
    }
}
