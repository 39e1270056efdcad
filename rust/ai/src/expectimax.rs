//! Fixed-depth expectimax search over placements and future deals.
//!
//! A max node picks the best empty cell; a chance node averages over every
//! card still undealt. The search mutates one [`BoardState`] in place and
//! reverts each placement before returning, so no board is ever copied.

use pokersquares_engine::cards::Card;
use pokersquares_engine::grid::Position;
use pokersquares_engine::player::SquaresPlayer;
use pokersquares_engine::points::PointSystem;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::board::BoardState;
use crate::heuristic::evaluate;

/// One max ply plus one chance ply before falling back to the heuristic.
pub const DEFAULT_DEPTH_LIMIT: u32 = 1;

/// Expected final value of placing `card` at `(row, col)`, enumerating
/// `depth` further (chance, max) plies exactly.
///
/// A board completed by the placement is scored exactly regardless of
/// `depth`. Otherwise depth 0 falls back to [`evaluate`].
///
/// `board` is returned to its prior state before this function returns.
///
/// # Panics
///
/// Panics if the cell is occupied or `card` is not undealt on `board`.
pub fn search(
    board: &mut BoardState,
    system: &PointSystem,
    card: Card,
    row: usize,
    col: usize,
    depth: u32,
) -> f64 {
    let mut board = board.scoped_place(card, row, col);
    if board.is_full() {
        return f64::from(system.total_score(board.grid()));
    }
    if depth == 0 {
        return evaluate(board.grid(), system);
    }

    let mut best = f64::NEG_INFINITY;
    // place/undo restore both regions in order, so indices stay valid across the recursion
    for slot in 0..board.open_positions().len() {
        let pos = Position::from_index(board.open_positions()[slot]);
        let draws = board.undealt().len();
        let mut sum = 0.0;
        for i in 0..draws {
            let next = board.undealt()[i];
            sum += search(&mut board, system, next, pos.row, pos.col, depth - 1);
        }
        best = best.max(sum / draws as f64);
    }
    best
}

/// Expectimax player: evaluates every empty cell for the dealt card and
/// keeps the best, breaking ties uniformly at random.
///
/// # Example
///
/// ```rust
/// use pokersquares_ai::expectimax::ExpectimaxPlayer;
/// use pokersquares_engine::cards::Card;
///
/// let mut player = ExpectimaxPlayer::new(0, 7);
/// let card: Card = "QH".parse().unwrap();
/// let pos = player.choose_play(card);
/// assert_eq!(player.board().grid().get(pos.row, pos.col), Some(card));
/// ```
#[derive(Debug, Clone)]
pub struct ExpectimaxPlayer {
    board: BoardState,
    system: PointSystem,
    depth_limit: u32,
    rng: ChaCha20Rng,
}

impl ExpectimaxPlayer {
    /// Player scoring with the British system until told otherwise.
    pub fn new(depth_limit: u32, seed: u64) -> Self {
        Self {
            board: BoardState::new(),
            system: PointSystem::british(),
            depth_limit,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn with_system(mut self, system: PointSystem) -> Self {
        self.system = system;
        self
    }

    /// Continue from a board already partly played.
    pub fn with_board(mut self, board: BoardState) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Every empty cell whose search value equals the best found for `card`,
    /// in row-major order, with that value.
    pub fn best_cells(&mut self, card: Card) -> (Vec<Position>, f64) {
        let mut best = Vec::new();
        let mut best_value = f64::NEG_INFINITY;
        for slot in 0..self.board.open_positions().len() {
            let pos = Position::from_index(self.board.open_positions()[slot]);
            let value = search(
                &mut self.board,
                &self.system,
                card,
                pos.row,
                pos.col,
                self.depth_limit,
            );
            trace!(%card, %pos, value, "candidate");
            if value > best_value {
                best_value = value;
                best.clear();
                best.push(pos);
            } else if value == best_value {
                best.push(pos);
            }
        }
        best.sort();
        (best, best_value)
    }

    /// Choose a cell for `card`, place it there permanently and return it.
    ///
    /// # Panics
    ///
    /// Panics if the board is full or `card` has already been played.
    pub fn choose_play(&mut self, card: Card) -> Position {
        let (best, value) = self.best_cells(card);
        assert!(!best.is_empty(), "no empty cell left for {}", card);
        let pos = best[self.rng.random_range(0..best.len())];
        debug!(%card, %pos, value, ties = best.len(), "play chosen");
        self.board.place(card, pos.row, pos.col);
        pos
    }
}

impl SquaresPlayer for ExpectimaxPlayer {
    fn set_point_system(&mut self, system: PointSystem, _millis: u64) {
        self.system = system;
    }

    fn init(&mut self) {
        self.board.reset();
    }

    fn get_play(&mut self, card: Card, _millis_remaining: u64) -> Position {
        self.choose_play(card)
    }

    fn name(&self) -> &str {
        "ExpectimaxPlayer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn search_leaves_board_untouched() {
        let mut board = BoardState::new();
        for (i, c) in ["2C", "9H", "KS", "4D", "TC", "7H", "AS", "3S"].iter().enumerate() {
            let pos = Position::from_index(i * 3);
            board.place(card(c), pos.row, pos.col);
        }
        let before = board.clone();
        let system = PointSystem::american();
        for &p in before.open_positions().iter().take(4) {
            let pos = Position::from_index(p);
            search(&mut board, &system, card("QD"), pos.row, pos.col, 0);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn depth_zero_is_heuristic_of_one_placement() {
        let mut board = BoardState::new();
        board.place(card("5H"), 0, 0);
        let system = PointSystem::american();

        let value = search(&mut board, &system, card("6H"), 0, 1, 0);
        let mut grid = *board.grid();
        grid.set(0, 1, card("6H"));
        assert_eq!(value, evaluate(&grid, &system));
    }

    #[test]
    fn choose_play_places_exactly_one_card() {
        let mut player = ExpectimaxPlayer::new(0, 1).with_system(PointSystem::american());
        let pos = player.choose_play(card("JC"));
        assert_eq!(player.board().num_plays(), 1);
        assert_eq!(player.board().played_positions(), &[pos.index()]);

        let next = player.choose_play(card("JD"));
        assert_ne!(pos, next);
        assert_eq!(player.board().num_plays(), 2);
        assert_eq!(player.board().grid().occupied(), 2);
    }

    #[test]
    fn init_clears_the_board() {
        let mut player = ExpectimaxPlayer::new(0, 3);
        player.choose_play(card("8S"));
        player.init();
        assert_eq!(player.board().num_plays(), 0);
        assert_eq!(player.board().undealt().len(), 52);
    }

    #[test]
    fn empty_board_ties_every_cell_at_depth_zero() {
        let mut player = ExpectimaxPlayer::new(0, 5).with_system(PointSystem::american());
        let (best, _) = player.best_cells(card("4C"));
        assert_eq!(best.len(), 25);
    }

    #[test]
    fn same_seed_same_choices() {
        let cards = ["4C", "4D", "9S", "KH", "2C"];
        let mut a = ExpectimaxPlayer::new(0, 11);
        let mut b = ExpectimaxPlayer::new(0, 11);
        for c in cards {
            assert_eq!(a.choose_play(card(c)), b.choose_play(card(c)));
        }
    }
}
