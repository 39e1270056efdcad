//! Point systems mapping each line's poker hand to a score.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::grid::{Grid, NUM_LINES};
use crate::hand::{classify_line, PokerHand};

const AMERICAN: [i32; PokerHand::COUNT] = [0, 2, 5, 10, 15, 20, 25, 50, 75, 100];
const BRITISH: [i32; PokerHand::COUNT] = [0, 1, 3, 6, 12, 5, 10, 16, 30, 30];

/// A named score table indexed by [`PokerHand::id`].
///
/// # Examples
///
/// ```
/// use pokersquares_engine::hand::PokerHand;
/// use pokersquares_engine::points::PointSystem;
///
/// let british = PointSystem::british();
/// assert_eq!(british.points_for(PokerHand::Straight), 12);
/// assert_eq!(british.flush_points(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSystem {
    name: String,
    table: [i32; PokerHand::COUNT],
}

impl PointSystem {
    pub fn american() -> Self {
        Self {
            name: "american".into(),
            table: AMERICAN,
        }
    }

    pub fn british() -> Self {
        Self {
            name: "british".into(),
            table: BRITISH,
        }
    }

    /// Every hand scores a uniform integer in -128..=127.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            name: "random".into(),
            table: std::array::from_fn(|_| rng.random_range(-128..=127)),
        }
    }

    pub fn from_table(name: &str, table: &[i32]) -> Result<Self, GameError> {
        let table: [i32; PokerHand::COUNT] =
            table.try_into().map_err(|_| GameError::InvalidPointTable {
                expected: PokerHand::COUNT,
                actual: table.len(),
            })?;
        Ok(Self {
            name: name.to_string(),
            table,
        })
    }

    pub fn by_name(name: &str) -> Result<Self, GameError> {
        match name.to_ascii_lowercase().as_str() {
            "american" => Ok(Self::american()),
            "british" => Ok(Self::british()),
            _ => Err(GameError::UnknownPointSystem(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &[i32; PokerHand::COUNT] {
        &self.table
    }

    pub fn points_for(&self, hand: PokerHand) -> i32 {
        self.table[hand.id()]
    }

    pub fn flush_points(&self) -> i32 {
        self.points_for(PokerHand::Flush)
    }

    pub fn straight_points(&self) -> i32 {
        self.points_for(PokerHand::Straight)
    }

    /// Current score of each line, rows 0..5 then columns 0..5.
    ///
    /// Partial lines score whatever rank multiples they already hold.
    pub fn line_scores(&self, grid: &Grid) -> [i32; NUM_LINES] {
        grid.lines().map(|line| self.points_for(classify_line(&line)))
    }

    /// Sum of the ten line scores. Only meaningful as a final score once the grid is full.
    pub fn total_score(&self, grid: &Grid) -> i32 {
        debug_assert!(grid.is_full(), "total score requested for an incomplete grid");
        self.line_scores(grid).iter().sum()
    }
}

impl fmt::Display for PointSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Point system: {}", self.name)?;
        for hand in PokerHand::ALL {
            writeln!(f, "  {:<16}{:>5}", hand.name(), self.points_for(hand))?;
        }
        Ok(())
    }
}
