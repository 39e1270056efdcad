use crate::cards::Card;
use crate::grid::Position;
use crate::points::PointSystem;

/// Interface between the host game loop and a Poker Squares player.
///
/// The host calls [`set_point_system`](SquaresPlayer::set_point_system) and
/// [`init`](SquaresPlayer::init) before each game, then
/// [`get_play`](SquaresPlayer::get_play) once per dealt card. Every answer
/// must name an empty cell; the host rejects anything else.
///
/// # Example Implementation
///
/// ```rust
/// use pokersquares_engine::cards::Card;
/// use pokersquares_engine::grid::{Position, NUM_POS};
/// use pokersquares_engine::player::SquaresPlayer;
/// use pokersquares_engine::points::PointSystem;
///
/// /// Fills the grid in row-major order.
/// struct InOrder {
///     next: usize,
/// }
///
/// impl SquaresPlayer for InOrder {
///     fn set_point_system(&mut self, _system: PointSystem, _millis: u64) {}
///
///     fn init(&mut self) {
///         self.next = 0;
///     }
///
///     fn get_play(&mut self, _card: Card, _millis_remaining: u64) -> Position {
///         let pos = Position::from_index(self.next % NUM_POS);
///         self.next += 1;
///         pos
///     }
///
///     fn name(&self) -> &str {
///         "InOrder"
///     }
/// }
/// ```
pub trait SquaresPlayer: Send {
    /// Provide the scoring rules and the total time budget for a game.
    fn set_point_system(&mut self, system: PointSystem, millis: u64);

    /// Reset any per-game state. Called before the first card of every game.
    fn init(&mut self);

    /// Choose the cell for `card`. `millis_remaining` is advisory.
    fn get_play(&mut self, card: Card, millis_remaining: u64) -> Position;

    /// Return the name/identifier of this player implementation.
    fn name(&self) -> &str;
}

/// Default per-game time budget handed to players, in milliseconds.
pub const GAME_MILLIS: u64 = 30_000;
