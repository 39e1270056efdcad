use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Poker hand categories scored on each Poker Squares line.
///
/// The discriminant is the hand's index into a point table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PokerHand {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl PokerHand {
    pub const COUNT: usize = 10;

    pub const ALL: [PokerHand; PokerHand::COUNT] = [
        PokerHand::HighCard,
        PokerHand::OnePair,
        PokerHand::TwoPair,
        PokerHand::ThreeOfAKind,
        PokerHand::Straight,
        PokerHand::Flush,
        PokerHand::FullHouse,
        PokerHand::FourOfAKind,
        PokerHand::StraightFlush,
        PokerHand::RoyalFlush,
    ];

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PokerHand::HighCard => "high card",
            PokerHand::OnePair => "pair",
            PokerHand::TwoPair => "two pair",
            PokerHand::ThreeOfAKind => "three of a kind",
            PokerHand::Straight => "straight",
            PokerHand::Flush => "flush",
            PokerHand::FullHouse => "full house",
            PokerHand::FourOfAKind => "four of a kind",
            PokerHand::StraightFlush => "straight flush",
            PokerHand::RoyalFlush => "royal flush",
        }
    }
}

/// Classifies one grid line of up to five cards; empty cells are skipped.
///
/// Rank multiples (pairs, trips, quads, full house) are recognized on
/// partial lines. Straights and flushes need all five cards.
///
/// ```
/// use pokersquares_engine::cards::{Card, Rank, Suit};
/// use pokersquares_engine::hand::{classify_line, PokerHand};
///
/// let line = [
///     Some(Card::new(Rank::Nine, Suit::Clubs)),
///     None,
///     Some(Card::new(Rank::Nine, Suit::Hearts)),
///     None,
///     None,
/// ];
/// assert_eq!(classify_line(&line), PokerHand::OnePair);
/// ```
pub fn classify_line(line: &[Option<Card>]) -> PokerHand {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut n = 0usize;
    for c in line.iter().flatten() {
        rank_counts[rank_val(c.rank) as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
        n += 1;
    }

    let mut pairs = 0;
    let mut trips = 0;
    let mut quads = 0;
    for &count in &rank_counts[2..] {
        match count {
            2 => pairs += 1,
            3 => trips += 1,
            4 => quads += 1,
            _ => {}
        }
    }

    if n == 5 {
        let flush = suit_counts.contains(&5);
        if let Some(high) = detect_straight_high(&rank_counts) {
            return match (flush, high) {
                (true, 14) => PokerHand::RoyalFlush,
                (true, _) => PokerHand::StraightFlush,
                (false, _) => PokerHand::Straight,
            };
        }
        if flush {
            return PokerHand::Flush;
        }
    }

    if quads > 0 {
        PokerHand::FourOfAKind
    } else if trips > 0 && pairs > 0 {
        PokerHand::FullHouse
    } else if trips > 0 {
        PokerHand::ThreeOfAKind
    } else if pairs >= 2 {
        PokerHand::TwoPair
    } else if pairs == 1 {
        PokerHand::OnePair
    } else {
        PokerHand::HighCard
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

// Five distinct consecutive ranks; the ace also plays low in A-2-3-4-5.
fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let present = |r: usize| rank_counts[r] == 1 || (r == 1 && rank_counts[14] == 1);
    (5..=14)
        .rev()
        .find(|&high| (high - 4..=high).all(|r| present(r)))
        .map(|high| high as u8)
}
