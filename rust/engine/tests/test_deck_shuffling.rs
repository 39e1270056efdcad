use std::collections::HashSet;

use pokersquares_engine::cards::{Card, NUM_CARDS};
use pokersquares_engine::deck::Deck;
use pokersquares_engine::grid::NUM_POS;

fn game_deal(deck: &mut Deck) -> Vec<Card> {
    deck.shuffle();
    (0..NUM_POS).map(|_| deck.deal().unwrap()).collect()
}

#[test]
fn shuffled_deck_deals_every_card_once() {
    let mut deck = Deck::seeded(42);
    deck.shuffle();
    let mut seen = HashSet::new();
    while let Ok(card) = deck.deal() {
        assert!(seen.insert(card), "{} dealt twice", card);
    }
    assert_eq!(seen.len(), NUM_CARDS);
    assert!(deck.undealt().is_empty());
}

#[test]
fn same_seed_gives_same_series_of_deals() {
    let mut d1 = Deck::seeded(12345);
    let mut d2 = Deck::seeded(12345);
    for _ in 0..3 {
        assert_eq!(game_deal(&mut d1), game_deal(&mut d2));
    }
}

#[test]
fn consecutive_deals_differ() {
    let mut deck = Deck::seeded(5);
    let first = game_deal(&mut deck);
    let second = game_deal(&mut deck);
    assert_ne!(first, second);
}

#[test]
fn different_seeds_give_different_deals() {
    assert_ne!(
        game_deal(&mut Deck::seeded(1)),
        game_deal(&mut Deck::seeded(2))
    );
}

#[test]
fn a_game_deal_leaves_27_cards() {
    let mut deck = Deck::seeded(777);
    let dealt: HashSet<Card> = game_deal(&mut deck).into_iter().collect();
    assert_eq!(dealt.len(), NUM_POS);
    assert_eq!(deck.remaining(), NUM_CARDS - NUM_POS);
    assert!(deck.undealt().iter().all(|c| !dealt.contains(c)));
}
