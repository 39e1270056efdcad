//! Score command: evaluate a completed grid typed on the command line.

use std::collections::HashSet;
use std::io::Write;

use pokersquares_engine::cards::Card;
use pokersquares_engine::grid::{Grid, NUM_POS};

use super::resolve_config;
use crate::cli::GameOptions;
use crate::error::CliError;
use crate::formatters::{format_grid, format_line_scores};

/// Parse 25 distinct cards in row-major order, separated by whitespace or commas.
fn parse_grid(cards: &str) -> Result<Grid, CliError> {
    let parsed = cards
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Card>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if parsed.len() != NUM_POS {
        return Err(CliError::InvalidInput(format!(
            "expected {} cards, got {}",
            NUM_POS,
            parsed.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card: {}", dup)));
    }
    Ok(Grid::from_row_major(&parsed))
}

/// Print the grid, each line's hand and points, and the total.
pub fn handle_score_command(
    cards: &str,
    system: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let grid = parse_grid(cards)?;
    let cfg = resolve_config(&GameOptions {
        system,
        ..GameOptions::default()
    })?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let system = cfg.build_point_system(seed)?;

    writeln!(out, "Point system: {}", system.name())?;
    writeln!(out)?;
    write!(out, "{}", format_grid(&grid))?;
    writeln!(out)?;
    write!(out, "{}", format_line_scores(&grid, &system))?;
    writeln!(out, "Total: {}", system.total_score(&grid))?;
    Ok(())
}
