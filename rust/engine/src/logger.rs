use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{GameResult, PlayRecord};
use crate::grid::{Grid, Position};

/// Complete record of a Poker Squares game: deals, placements and score.
/// Serialized to JSONL format for game history storage and analysis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for deck shuffling (enables deterministic replay)
    pub seed: Option<u64>,
    /// Name of the player that made the placements
    pub player: String,
    /// Name of the point system the game was scored with
    pub point_system: String,
    /// Every placement in deal order
    pub plays: Vec<PlayRecord>,
    /// Final score
    pub score: i32,
    /// Timestamp when the game was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Record a finished game. `ts` is left for the logger to stamp.
    pub fn from_result(
        game_id: String,
        seed: u64,
        player: &str,
        point_system: &str,
        result: &GameResult,
    ) -> Self {
        Self {
            game_id,
            seed: Some(seed),
            player: player.to_string(),
            point_system: point_system.to_string(),
            plays: result.plays.clone(),
            score: result.score,
            ts: None,
            meta: Some(serde_json::json!({ "millis_used": result.millis_used })),
        }
    }

    /// Rebuild the final grid from the recorded plays.
    pub fn replay_grid(&self) -> Result<Grid, GameError> {
        let mut grid = Grid::new();
        for play in &self.plays {
            grid.try_place(Position::new(play.row, play.col), play.card)?;
        }
        Ok(grid)
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Highest sequence number among `yyyymmdd` ids in a JSONL stream.
/// Lines that are not records are skipped.
fn last_seq<R: BufRead>(reader: R, yyyymmdd: &str) -> std::io::Result<u32> {
    let prefix = format!("{}-", yyyymmdd);
    let mut max = 0;
    for line in reader.lines() {
        let line = line?;
        let Ok(rec) = serde_json::from_str::<GameRecord>(&line) else {
            continue;
        };
        if let Some(seq) = rec
            .game_id
            .strip_prefix(&prefix)
            .and_then(|n| n.parse::<u32>().ok())
        {
            max = max.max(seq);
        }
    }
    Ok(max)
}

/// Appends [`GameRecord`]s to a JSONL file, one line per game.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    ///
    /// Ids continue after the highest id already recorded in the file for
    /// today's date.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = if path.exists() {
            last_seq(BufReader::new(File::open(path)?), &date)?
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_seq_takes_highest_id_for_the_date() {
        let mk = |id: &str| {
            serde_json::to_string(&GameRecord {
                game_id: id.to_string(),
                seed: None,
                player: "p".into(),
                point_system: "british".into(),
                plays: Vec::new(),
                score: 0,
                ts: None,
                meta: None,
            })
            .unwrap()
        };
        let text = [
            mk("20250102-000007"),
            "not json".to_string(),
            mk("20250102-000003"),
            mk("20250101-000040"),
        ]
        .join("\n");
        assert_eq!(last_seq(text.as_bytes(), "20250102").unwrap(), 7);
        assert_eq!(last_seq(text.as_bytes(), "20250103").unwrap(), 0);
    }
}
