//! Head-to-head player evaluation.
//!
//! Both players see the same deal in every game, so the score difference
//! measures placement skill rather than luck of the draw.

use std::io::Write;

use pokersquares_engine::game::PokerSquaresGame;
use tracing::debug;

use super::{ScoreSummary, build_player, resolve_config};
use crate::cli::GameOptions;
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Default)]
struct Tally {
    wins_a: u32,
    wins_b: u32,
    ties: u32,
}

/// Evaluates two players across `games` shared deals.
///
/// # Arguments
///
/// * `player_a` - First player type
/// * `player_b` - Second player type
/// * `games` - Number of deals to play (must be >= 1)
/// * `opts` - Seed, point system and depth overrides (`player` is ignored)
/// * `out` - Output stream for evaluation results
/// * `err` - Output stream for errors
pub fn handle_eval_command(
    player_a: &str,
    player_b: &str,
    games: u32,
    opts: &GameOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = resolve_config(&GameOptions {
        player: None,
        ..opts.clone()
    })?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let system = cfg.build_point_system(base_seed)?;
    let mut a = build_player(player_a, cfg.depth_limit, base_seed)?;
    let mut b = build_player(player_b, cfg.depth_limit, base_seed)?;

    let mut scores_a = Vec::with_capacity(games as usize);
    let mut scores_b = Vec::with_capacity(games as usize);
    let mut tally = Tally::default();
    for i in 0..games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let score_a = PokerSquaresGame::new(system.clone(), seed, cfg.game_millis)
            .play(a.as_mut())?
            .score;
        let score_b = PokerSquaresGame::new(system.clone(), seed, cfg.game_millis)
            .play(b.as_mut())?
            .score;
        debug!(game = i, seed, score_a, score_b, "deal evaluated");
        match score_a.cmp(&score_b) {
            std::cmp::Ordering::Greater => tally.wins_a += 1,
            std::cmp::Ordering::Less => tally.wins_b += 1,
            std::cmp::Ordering::Equal => tally.ties += 1,
        }
        scores_a.push(score_a);
        scores_b.push(score_b);
    }

    let (Some(sum_a), Some(sum_b)) = (
        ScoreSummary::from_scores(&scores_a),
        ScoreSummary::from_scores(&scores_b),
    ) else {
        return Err(CliError::InvalidInput("no games were played".to_string()));
    };

    writeln!(out, "Evaluation: {} games", games)?;
    writeln!(out, "Point system: {}", system.name())?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Depth: {}", cfg.depth_limit)?;
    writeln!(out)?;
    for (label, name, s, wins) in [
        ("A", a.name(), &sum_a, tally.wins_a),
        ("B", b.name(), &sum_b, tally.wins_b),
    ] {
        writeln!(
            out,
            "{} {:<18} mean {:>8.2}  min {:>5}  max {:>5}  wins {}",
            label, name, s.mean, s.min, s.max, wins
        )?;
    }
    writeln!(out, "Ties: {}", tally.ties)?;
    writeln!(out, "Mean difference (A - B): {:.2}", sum_a.mean - sum_b.mean)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn opts() -> GameOptions {
        GameOptions {
            player: None,
            system: Some("american".into()),
            seed: Some(9),
            depth: Some(0),
        }
    }

    #[test]
    #[serial]
    fn identical_players_tie_every_deal() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_eval_command("random", "random", 3, &opts(), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Evaluation: 3 games"));
        assert!(text.contains("Ties: 3"), "{}", text);
    }

    #[test]
    #[serial]
    fn unknown_player_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_eval_command("random", "oracle", 1, &opts(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn zero_games_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_eval_command("random", "random", 0, &opts(), &mut out, &mut err);
        assert!(result.is_err());
    }
}
