//! Static evaluation of an incomplete grid.
//!
//! Lines that already form a scoring hand count at face value. Every other
//! row is credited with its progress toward a straight and every other
//! column with its progress toward a flush.

use pokersquares_engine::cards::{Card, Rank};
use pokersquares_engine::grid::{Grid, SIZE};
use pokersquares_engine::points::PointSystem;

/// All ten straights, A-2-3-4-5 (bit 0) through T-J-Q-K-A (bit 9).
const ALL_STRAIGHTS: u16 = (1 << 10) - 1;

/// Estimated final value of `grid` under `system`.
pub fn evaluate(grid: &Grid, system: &PointSystem) -> f64 {
    let scores = system.line_scores(grid);
    let mut total = 0.0;
    for i in 0..SIZE {
        total += if scores[i] > 0 {
            f64::from(scores[i])
        } else {
            straight_potential(&grid.row(i), system)
        };
    }
    for i in 0..SIZE {
        let score = scores[SIZE + i];
        total += if score > 0 {
            f64::from(score)
        } else {
            flush_potential(&grid.col(i), system)
        };
    }
    total
}

/// Share of the flush payout a line has earned so far.
///
/// Zero once two cards disagree in suit. A lone card earns half the share
/// of its count.
pub fn flush_potential(line: &[Option<Card>], system: &PointSystem) -> f64 {
    let mut suit = None;
    let mut count = 0usize;
    for card in line.iter().flatten() {
        match suit {
            None => suit = Some(card.suit),
            Some(s) if s != card.suit => return 0.0,
            Some(_) => {}
        }
        count += 1;
    }
    scaled(system.flush_points(), count)
}

/// Share of the straight payout a line has earned so far.
///
/// Zero once a rank repeats or no run of five consecutive ranks (ace high
/// or low) can hold every card in the line.
pub fn straight_potential(line: &[Option<Card>], system: &PointSystem) -> f64 {
    let mut open = ALL_STRAIGHTS;
    let mut seen = 0u16;
    let mut count = 0usize;
    for card in line.iter().flatten() {
        let bit = 1u16 << card.rank.value();
        if seen & bit != 0 {
            return 0.0;
        }
        seen |= bit;
        open &= straights_containing(card.rank);
        if open == 0 {
            return 0.0;
        }
        count += 1;
    }
    scaled(system.straight_points(), count)
}

/// Bitmask of the straights whose five ranks include `rank`.
fn straights_containing(rank: Rank) -> u16 {
    let mask_for = |v: u8| -> u16 {
        // straight with low rank `lo` occupies bit `lo - 1`, lo in 1..=10
        let lo = v.saturating_sub(4).max(1);
        let hi = v.min(10);
        (lo..=hi).fold(0, |m, l| m | 1 << (l - 1))
    };
    match rank {
        Rank::Ace => mask_for(1) | mask_for(14),
        r => mask_for(r.value()),
    }
}

fn scaled(points: i32, count: usize) -> f64 {
    let share = f64::from(points) * count as f64 / SIZE as f64;
    match count {
        0 => 0.0,
        1 => share / 2.0,
        _ => share,
    }
}
