use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::grid::{Grid, Position, NUM_POS};
use crate::player::SquaresPlayer;
use crate::points::PointSystem;

/// One placement made during a game, in deal order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// The dealt card
    pub card: Card,
    /// Row the player chose
    pub row: usize,
    /// Column the player chose
    pub col: usize,
}

/// Outcome of a completed game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// The full grid
    pub grid: Grid,
    /// Final score under the game's point system
    pub score: i32,
    /// Every placement in deal order
    pub plays: Vec<PlayRecord>,
    /// Wall-clock time the player spent deciding
    pub millis_used: u64,
    /// Whether the player exceeded the advisory budget
    pub over_time: bool,
}

/// Host loop for a single-player Poker Squares game.
///
/// Deals 25 cards one at a time, asks the player where each goes and
/// rejects any answer that is off the grid or names an occupied cell.
///
/// # Examples
///
/// ```
/// use pokersquares_engine::cards::Card;
/// use pokersquares_engine::game::PokerSquaresGame;
/// use pokersquares_engine::grid::Position;
/// use pokersquares_engine::player::SquaresPlayer;
/// use pokersquares_engine::points::PointSystem;
///
/// struct InOrder(usize);
///
/// impl SquaresPlayer for InOrder {
///     fn set_point_system(&mut self, _: PointSystem, _: u64) {}
///     fn init(&mut self) { self.0 = 0; }
///     fn get_play(&mut self, _: Card, _: u64) -> Position {
///         self.0 += 1;
///         Position::from_index(self.0 - 1)
///     }
///     fn name(&self) -> &str { "InOrder" }
/// }
///
/// let mut game = PokerSquaresGame::new(PointSystem::british(), 42, 30_000);
/// let result = game.play(&mut InOrder(0)).unwrap();
/// assert!(result.grid.is_full());
/// assert_eq!(result.plays.len(), 25);
/// ```
#[derive(Debug)]
pub struct PokerSquaresGame {
    system: PointSystem,
    deck: Deck,
    seed: u64,
    game_millis: u64,
}

impl PokerSquaresGame {
    pub fn new(system: PointSystem, seed: u64, game_millis: u64) -> Self {
        Self {
            system,
            deck: Deck::seeded(seed),
            seed,
            game_millis,
        }
    }

    pub fn system(&self) -> &PointSystem {
        &self.system
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Play one complete game. Each call reshuffles the deck, so repeated
    /// calls on the same value continue the seeded sequence of deals.
    pub fn play(&mut self, player: &mut dyn SquaresPlayer) -> Result<GameResult, GameError> {
        player.set_point_system(self.system.clone(), self.game_millis);
        player.init();
        self.deck.shuffle();

        let mut grid = Grid::new();
        let mut plays = Vec::with_capacity(NUM_POS);
        let mut remaining = self.game_millis;
        let mut used = 0u64;

        for turn in 0..NUM_POS {
            let card = self.deck.deal()?;
            let start = Instant::now();
            let pos: Position = player.get_play(card, remaining);
            let elapsed = start.elapsed().as_millis() as u64;
            used += elapsed;
            remaining = remaining.saturating_sub(elapsed);

            if let Err(e) = grid.try_place(pos, card) {
                warn!(player = player.name(), turn, %card, %pos, "rejected play: {}", e);
                return Err(e);
            }
            debug!(turn, %card, %pos, "card placed");
            plays.push(PlayRecord {
                card,
                row: pos.row,
                col: pos.col,
            });
        }

        let score = self.system.total_score(&grid);
        let over_time = used > self.game_millis;
        if over_time {
            warn!(
                player = player.name(),
                used, budget = self.game_millis, "player exceeded the time budget"
            );
        }
        info!(player = player.name(), score, used, "game complete");

        Ok(GameResult {
            grid,
            score,
            plays,
            millis_used: used,
            over_time,
        })
    }
}
