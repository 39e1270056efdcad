//! Play command: one game with a full transcript.

use std::io::Write;

use pokersquares_engine::game::PokerSquaresGame;
use tracing::info;

use super::{build_player, resolve_config};
use crate::cli::GameOptions;
use crate::error::CliError;
use crate::formatters::{format_card, format_grid, format_line_scores};
use crate::ui;

/// Play a single game and print each placement, the final grid, the line
/// scores and the total.
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration or override and
/// `CliError::Game` if the player makes an illegal placement.
pub fn handle_play_command(
    opts: &GameOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(opts)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let system = cfg.build_point_system(seed)?;
    let mut player = build_player(&cfg.player, cfg.depth_limit, seed)?;

    let mut game = PokerSquaresGame::new(system, seed, cfg.game_millis);

    writeln!(out, "Player: {} (depth {})", player.name(), cfg.depth_limit)?;
    writeln!(out, "Point system: {}", game.system().name())?;
    writeln!(out, "Seed: {}", game.seed())?;
    writeln!(out)?;

    info!(player = player.name(), seed = game.seed(), "starting game");
    let result = game.play(player.as_mut())?;

    for (i, play) in result.plays.iter().enumerate() {
        writeln!(
            out,
            "Card {:>2}: {} -> ({}, {})",
            i + 1,
            format_card(&play.card),
            play.row,
            play.col
        )?;
    }
    writeln!(out)?;
    write!(out, "{}", format_grid(&result.grid))?;
    writeln!(out)?;
    write!(out, "{}", format_line_scores(&result.grid, game.system()))?;
    writeln!(out, "Score: {}", result.score)?;

    if result.over_time {
        ui::display_warning(
            err,
            &format!(
                "player used {} ms of a {} ms budget",
                result.millis_used, cfg.game_millis
            ),
        )?;
    }
    Ok(())
}
