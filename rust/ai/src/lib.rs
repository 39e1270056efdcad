//! # pokersquares-ai: Poker Squares Players
//!
//! Decision engines for single-player Poker Squares. Each player implements
//! [`SquaresPlayer`] and is driven one dealt card at a time by the host loop
//! in `pokersquares_engine::game`.
//!
//! ## Core Components
//!
//! - [`board`] - In-place place/undo board state used by the search
//! - [`heuristic`] - Flush and straight potential of incomplete lines
//! - [`expectimax`] - Fixed-depth expectimax search and the player built on it
//! - [`random`] - Uniform random baseline
//! - [`create_player`] - Factory for players by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersquares_ai::create_player;
//! use pokersquares_engine::game::PokerSquaresGame;
//! use pokersquares_engine::points::PointSystem;
//!
//! let mut player = create_player("random", 1, 42).expect("known player");
//! let mut game = PokerSquaresGame::new(PointSystem::british(), 42, 30_000);
//! let result = game.play(player.as_mut()).expect("legal plays");
//! println!("{} scored {}", player.name(), result.score);
//! ```
//!
//! ## Player Types
//!
//! - `"expectimax"` - Expectimax search to the given depth
//! - `"random"` - Uniform random baseline

use pokersquares_engine::player::SquaresPlayer;

pub mod board;
pub mod expectimax;
pub mod heuristic;
pub mod random;

/// Names accepted by [`create_player`].
pub const PLAYER_NAMES: [&str; 2] = ["expectimax", "random"];

/// Create a player by name. `depth` only applies to the expectimax player.
/// Returns `None` for an unknown name.
///
/// # Example
///
/// ```rust
/// use pokersquares_ai::create_player;
///
/// let player = create_player("expectimax", 1, 7).unwrap();
/// assert_eq!(player.name(), "ExpectimaxPlayer");
/// assert!(create_player("oracle", 1, 7).is_none());
/// ```
pub fn create_player(name: &str, depth: u32, seed: u64) -> Option<Box<dyn SquaresPlayer>> {
    match name.to_ascii_lowercase().as_str() {
        "expectimax" => Some(Box::new(expectimax::ExpectimaxPlayer::new(depth, seed))),
        "random" => Some(Box::new(random::RandomPlayer::new(seed))),
        _ => None,
    }
}
