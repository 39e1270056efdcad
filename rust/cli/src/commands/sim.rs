//! Simulation command handler.
//!
//! Plays a batch of games with one player and reports score statistics.
//! Game `i` is dealt from `seed + i`, so a run is reproducible from its base
//! seed. With `--output`, every game is appended to a JSONL file as a
//! `GameRecord`.
//!
//! # Examples
//!
//! ```no_run
//! use pokersquares_cli::run;
//! use std::io;
//!
//! let args = ["pokersquares", "sim", "--games", "100", "--seed", "42", "--output", "data/sim.jsonl"];
//! let code = run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use pokersquares_engine::game::PokerSquaresGame;
use pokersquares_engine::logger::{GameLogger, GameRecord};
use tracing::info;

use super::{ScoreSummary, build_player, resolve_config};
use crate::cli::GameOptions;
use crate::error::CliError;
use crate::ui;

/// Handle the sim command: play `games` games and summarize their scores.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `opts` - Player, point system, seed and depth overrides
/// * `output` - Optional JSONL file receiving one record per game
/// * `out` - Output stream for the summary
/// * `err` - Output stream for errors and warnings
pub fn handle_sim_command(
    games: u32,
    opts: &GameOptions,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = resolve_config(opts)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let system = cfg.build_point_system(base_seed)?;
    let mut player = build_player(&cfg.player, cfg.depth_limit, base_seed)?;
    let mut logger = match &output {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    info!(
        games,
        seed = base_seed,
        player = player.name(),
        system = system.name(),
        "simulation started"
    );
    let mut scores = Vec::with_capacity(games as usize);
    let mut over_time = 0u32;
    for i in 0..games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let mut game = PokerSquaresGame::new(system.clone(), seed, cfg.game_millis);
        let result = game.play(player.as_mut())?;
        if result.over_time {
            over_time += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let mut record = GameRecord::from_result(
                logger.next_id(),
                seed,
                player.name(),
                system.name(),
                &result,
            );
            if let Some(meta) = record.meta.as_mut().and_then(|m| m.as_object_mut()) {
                meta.insert("depth_limit".into(), cfg.depth_limit.into());
            }
            logger.write(&record)?;
        }
        scores.push(result.score);
    }

    let Some(summary) = ScoreSummary::from_scores(&scores) else {
        return Err(CliError::InvalidInput("no games were played".to_string()));
    };
    writeln!(out, "Simulated: {} games", summary.games)?;
    writeln!(out, "Player: {} (depth {})", player.name(), cfg.depth_limit)?;
    writeln!(out, "Point system: {}", system.name())?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Mean score: {:.2}", summary.mean)?;
    writeln!(out, "Std dev: {:.2}", summary.std_dev)?;
    writeln!(out, "Min: {}", summary.min)?;
    writeln!(out, "Max: {}", summary.max)?;
    if let Some(path) = &output {
        writeln!(out, "Records appended to {}", path)?;
    }
    if over_time > 0 {
        ui::display_warning(
            err,
            &format!("{} of {} games exceeded the time budget", over_time, games),
        )?;
    }
    info!(mean = summary.mean, "simulation finished");
    Ok(())
}
