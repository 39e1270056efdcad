use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Seeded card source for a sequence of Poker Squares games.
///
/// Each [`Deck::shuffle`] draws a fresh permutation from the deck's RNG, so a
/// deck built from one seed yields the same series of deals every run.
///
/// ```
/// use pokersquares_engine::deck::Deck;
///
/// let mut deck = Deck::seeded(7);
/// deck.shuffle();
/// let first = deck.deal().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// assert!(!deck.undealt().contains(&first));
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    pub fn seeded(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            dealt: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Gather every card back and permute them.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.dealt = 0;
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        let card = *self.cards.get(self.dealt).ok_or(GameError::DeckExhausted)?;
        self.dealt += 1;
        Ok(card)
    }

    /// Cards not yet dealt, in the order they will come out.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.dealt
    }
}
