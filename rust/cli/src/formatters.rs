//! Card and grid formatters for terminal display.
//!
//! Suits render as Unicode symbols where the terminal supports them and as
//! lowercase letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use pokersquares_engine::cards::{Card, Rank, Suit};
//! use pokersquares_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use pokersquares_engine::cards::{Card, Suit};
use pokersquares_engine::grid::{Grid, SIZE};
use pokersquares_engine::hand::classify_line;
use pokersquares_engine::points::PointSystem;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_ascii_lowercase().to_string()
    }
}

/// Format a Card as rank letter plus suit, e.g. "T♥" or "Th".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.letter(), format_suit(&card.suit))
}

/// Render the grid one row per line with empty cells shown as `--`.
///
/// ```rust
/// use pokersquares_engine::grid::Grid;
/// # use pokersquares_cli::formatters::format_grid;
///
/// let text = format_grid(&Grid::new());
/// assert_eq!(text.lines().count(), 5);
/// assert!(text.starts_with("--"));
/// ```
pub fn format_grid(grid: &Grid) -> String {
    let mut text = String::new();
    for row in 0..SIZE {
        let cells: Vec<String> = grid
            .row(row)
            .iter()
            .map(|c| c.as_ref().map_or_else(|| "--".to_string(), format_card))
            .collect();
        text.push_str(&cells.join(" "));
        text.push('\n');
    }
    text
}

/// One line per row and column: label, hand name and points.
pub fn format_line_scores(grid: &Grid, system: &PointSystem) -> String {
    let scores = system.line_scores(grid);
    let mut text = String::new();
    for (i, line) in grid.lines().iter().enumerate() {
        let label = if i < SIZE {
            format!("Row {}", i + 1)
        } else {
            format!("Col {}", i - SIZE + 1)
        };
        let hand = classify_line(line);
        text.push_str(&format!("{:<6}{:<16}{:>5}\n", label, hand.name(), scores[i]));
    }
    text
}
