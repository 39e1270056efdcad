//! In-place board state for backtracking search.
//!
//! [`BoardState`] keeps the grid together with two partitioned arrays that
//! share the boundary `num_plays`:
//!
//! - the position list: `[0, num_plays)` are the cells played so far in play
//!   order, `[num_plays, 25)` the cells still empty;
//! - the simulated deck: `[0, num_plays)` are the cards on the grid,
//!   `[num_plays, 52)` the cards not yet dealt.
//!
//! [`place`](BoardState::place) swaps a card and a position across the
//! boundary; [`undo_last`](BoardState::undo_last) swaps them back, so a
//! place/undo pair leaves every array exactly as it found it.

use std::ops::{Deref, DerefMut};

use pokersquares_engine::cards::{Card, full_deck};
use pokersquares_engine::grid::{Grid, NUM_POS, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: Grid,
    plays: [usize; NUM_POS],
    deck: Vec<Card>,
    num_plays: usize,
    // (deck index, position index) each placement swapped into the boundary slot
    swaps: [(usize, usize); NUM_POS],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            plays: std::array::from_fn(|i| i),
            deck: full_deck(),
            num_plays: 0,
            swaps: [(0, 0); NUM_POS],
        }
    }

    /// Clear the grid and return every card to the undealt region.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn num_plays(&self) -> usize {
        self.num_plays
    }

    pub fn is_full(&self) -> bool {
        self.num_plays == NUM_POS
    }

    /// Cards not yet on the grid. Order carries no meaning.
    pub fn undealt(&self) -> &[Card] {
        &self.deck[self.num_plays..]
    }

    /// Row-major indices of the empty cells. Order carries no meaning.
    pub fn open_positions(&self) -> &[usize] {
        &self.plays[self.num_plays..]
    }

    /// Row-major indices of the occupied cells, in play order.
    pub fn played_positions(&self) -> &[usize] {
        &self.plays[..self.num_plays]
    }

    /// Put `card` on `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied or `card` is not among the undealt cards.
    pub fn place(&mut self, card: Card, row: usize, col: usize) {
        assert!(
            self.grid.is_empty_at(row, col),
            "cell ({}, {}) is already occupied",
            row,
            col
        );
        let n = self.num_plays;
        let Some(offset) = self.deck[n..].iter().position(|&c| c == card) else {
            panic!("{} is not among the undealt cards", card);
        };
        let play = Position::new(row, col).index();
        let Some(slot) = self.plays[n..].iter().position(|&p| p == play) else {
            panic!("position ({}, {}) is not open", row, col);
        };

        let deck_idx = n + offset;
        let pos_idx = n + slot;
        self.deck.swap(n, deck_idx);
        self.plays.swap(n, pos_idx);
        self.swaps[n] = (deck_idx, pos_idx);
        self.grid.set(row, col, card);
        self.num_plays += 1;
    }

    /// Revert the most recent [`place`](BoardState::place).
    ///
    /// # Panics
    ///
    /// Panics if nothing has been placed.
    pub fn undo_last(&mut self) {
        assert!(self.num_plays > 0, "undo with no plays made");
        self.num_plays -= 1;
        let n = self.num_plays;
        let pos = Position::from_index(self.plays[n]);
        self.grid.clear(pos.row, pos.col);
        let (deck_idx, pos_idx) = self.swaps[n];
        self.deck.swap(n, deck_idx);
        self.plays.swap(n, pos_idx);
    }

    /// Place a card for the lifetime of the returned guard; the placement is
    /// undone when the guard drops.
    pub fn scoped_place(&mut self, card: Card, row: usize, col: usize) -> ScopedPlay<'_> {
        self.place(card, row, col);
        ScopedPlay { board: self }
    }
}

/// A temporary placement. Dereferences to the board it was made on and
/// calls [`BoardState::undo_last`] on drop.
pub struct ScopedPlay<'a> {
    board: &'a mut BoardState,
}

impl Deref for ScopedPlay<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl DerefMut for ScopedPlay<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for ScopedPlay<'_> {
    fn drop(&mut self) {
        self.board.undo_last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokersquares_engine::cards::{Rank, Suit};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn place_moves_card_and_position_across_the_boundary() {
        let mut board = BoardState::new();
        board.place(card("7H"), 3, 1);

        assert_eq!(board.num_plays(), 1);
        assert_eq!(board.grid().get(3, 1), Some(card("7H")));
        assert_eq!(board.played_positions(), &[16]);
        assert!(!board.open_positions().contains(&16));
        assert_eq!(board.open_positions().len(), 24);
        assert!(!board.undealt().contains(&card("7H")));
        assert_eq!(board.undealt().len(), 51);
    }

    #[test]
    fn undo_restores_identical_state() {
        let mut board = BoardState::new();
        board.place(card("2C"), 0, 0);
        board.place(card("KD"), 4, 4);
        let before = board.clone();

        board.place(card("QS"), 2, 2);
        board.place(card("3H"), 1, 3);
        board.undo_last();
        board.undo_last();

        assert_eq!(board, before);
    }

    #[test]
    fn scoped_place_undoes_on_drop() {
        let mut board = BoardState::new();
        let before = board.clone();
        {
            let scoped = board.scoped_place(Card::new(Rank::Ace, Suit::Spades), 0, 4);
            assert_eq!(scoped.num_plays(), 1);
            assert_eq!(scoped.grid().get(0, 4), Some(Card::new(Rank::Ace, Suit::Spades)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn prefixes_track_the_grid() {
        let mut board = BoardState::new();
        let plays = [("AS", 0, 0), ("TD", 2, 3), ("5C", 4, 1), ("9H", 1, 1)];
        for (c, r, col) in plays {
            board.place(card(c), r, col);
        }
        assert_eq!(board.grid().occupied(), board.num_plays());
        for &p in board.played_positions() {
            let pos = Position::from_index(p);
            assert!(board.grid().get(pos.row, pos.col).is_some());
        }
        for &p in board.open_positions() {
            let pos = Position::from_index(p);
            assert!(board.grid().is_empty_at(pos.row, pos.col));
        }
        for c in board.undealt() {
            assert!(!plays.iter().any(|(s, _, _)| card(s) == *c));
        }
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn placing_on_occupied_cell_panics() {
        let mut board = BoardState::new();
        board.place(card("2C"), 0, 0);
        board.place(card("3C"), 0, 0);
    }

    #[test]
    #[should_panic(expected = "not among the undealt cards")]
    fn placing_a_dealt_card_panics() {
        let mut board = BoardState::new();
        board.place(card("2C"), 0, 0);
        board.place(card("2C"), 0, 1);
    }

    #[test]
    #[should_panic(expected = "undo with no plays")]
    fn undo_on_empty_board_panics() {
        BoardState::new().undo_last();
    }
}
