//! Baseline player that ignores the cards entirely.

use pokersquares_engine::cards::Card;
use pokersquares_engine::grid::{Grid, Position};
use pokersquares_engine::player::SquaresPlayer;
use pokersquares_engine::points::PointSystem;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Places every card on a uniformly chosen empty cell.
///
/// Useful as a floor when comparing players and as a fast stand-in for
/// host loop tests. The choices are reproducible for a given seed.
///
/// # Example
///
/// ```rust
/// use pokersquares_ai::random::RandomPlayer;
/// use pokersquares_engine::game::PokerSquaresGame;
/// use pokersquares_engine::points::PointSystem;
///
/// let mut player = RandomPlayer::new(9);
/// let mut game = PokerSquaresGame::new(PointSystem::american(), 42, 30_000);
/// let result = game.play(&mut player).unwrap();
/// assert!(result.grid.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    grid: Grid,
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl SquaresPlayer for RandomPlayer {
    fn set_point_system(&mut self, _system: PointSystem, _millis: u64) {}

    fn init(&mut self) {
        self.grid = Grid::new();
    }

    fn get_play(&mut self, card: Card, _millis_remaining: u64) -> Position {
        let open = self.grid.empty_positions();
        assert!(!open.is_empty(), "no empty cell left for {}", card);
        let pos = open[self.rng.random_range(0..open.len())];
        self.grid.set(pos.row, pos.col, card);
        pos
    }

    fn name(&self) -> &str {
        "RandomPlayer"
    }
}
