//! # pokersquares-engine: Poker Squares Game Core
//!
//! A deterministic single-player Poker Squares engine. Twenty-five cards are
//! dealt one at a time onto a 5×5 grid; every row and column is then scored
//! as a five-card poker hand under a point system.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`grid`] - The 5×5 grid, positions and line extraction
//! - [`hand`] - Poker hand classification of full and partial lines
//! - [`points`] - Point systems (American, British, random, custom)
//! - [`player`] - The interface players implement
//! - [`game`] - Host game loop validating each placement
//! - [`logger`] - GameRecord JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersquares_engine::cards::Card;
//! use pokersquares_engine::grid::Grid;
//! use pokersquares_engine::points::PointSystem;
//!
//! let cards: Vec<Card> = "AS KS QS JS TS 2H 2D 2C 3H 3D 4C 5C 6C 7C 8C 9H 9D 4H 4D 6H 7S 8S 5H 5D 6D"
//!     .split_whitespace()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let grid = Grid::from_row_major(&cards);
//!
//! let american = PointSystem::american();
//! let lines = american.line_scores(&grid);
//! assert_eq!(lines[0], 100); // royal flush in the first row
//! println!("Total: {}", american.total_score(&grid));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod grid;
pub mod hand;
pub mod logger;
pub mod player;
pub mod points;
