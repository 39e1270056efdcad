//! The 5×5 Poker Squares grid and its row-major positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Number of rows (and columns) in the square grid.
pub const SIZE: usize = 5;
/// Number of cells in the grid.
pub const NUM_POS: usize = SIZE * SIZE;
/// Number of scored lines: 5 rows followed by 5 columns.
pub const NUM_LINES: usize = 2 * SIZE;

/// A cell coordinate on the grid.
///
/// Positions convert to and from the row-major index `row * 5 + col`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    pub fn is_on_grid(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_POS).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 5×5 array of optional cards. Empty cells are `None`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<Card>; SIZE]; SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from up to 25 cards in row-major order.
    pub fn from_row_major(cards: &[Card]) -> Self {
        let mut grid = Self::new();
        for (i, &card) in cards.iter().take(NUM_POS).enumerate() {
            let p = Position::from_index(i);
            grid.cells[p.row][p.col] = Some(card);
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Card> {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, card: Card) {
        self.cells[row][col] = Some(card);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Places a card after checking the position is on the grid and free.
    pub fn try_place(&mut self, pos: Position, card: Card) -> Result<(), GameError> {
        if !pos.is_on_grid() {
            return Err(GameError::PositionOutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty_at(pos.row, pos.col) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set(pos.row, pos.col, card);
        Ok(())
    }

    pub fn row(&self, row: usize) -> [Option<Card>; SIZE] {
        self.cells[row]
    }

    pub fn col(&self, col: usize) -> [Option<Card>; SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// The ten scored lines: rows 0..5 then columns 0..5.
    pub fn lines(&self) -> [[Option<Card>; SIZE]; NUM_LINES] {
        std::array::from_fn(|i| if i < SIZE { self.row(i) } else { self.col(i - SIZE) })
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == NUM_POS
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|p| self.is_empty_at(p.row, p.col))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| "--".to_string(), |c| c.to_string()))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn position_index_round_trips() {
        for i in 0..NUM_POS {
            assert_eq!(Position::from_index(i).index(), i);
        }
        assert_eq!(Position::new(2, 3).index(), 13);
    }

    #[test]
    fn lines_are_rows_then_columns() {
        let mut grid = Grid::new();
        let card = Card::new(Rank::Ace, Suit::Spades);
        grid.set(1, 3, card);
        let lines = grid.lines();
        assert_eq!(lines[1][3], Some(card));
        assert_eq!(lines[SIZE + 3][1], Some(card));
        assert_eq!(lines.iter().flatten().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn try_place_rejects_occupied_and_off_grid() {
        let mut grid = Grid::new();
        let card = Card::new(Rank::Two, Suit::Clubs);
        assert!(grid.try_place(Position::new(0, 0), card).is_ok());
        assert_eq!(
            grid.try_place(Position::new(0, 0), card),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            grid.try_place(Position::new(5, 0), card),
            Err(GameError::PositionOutOfRange { row: 5, col: 0 })
        );
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn display_marks_empty_cells() {
        let mut grid = Grid::new();
        grid.set(0, 0, Card::new(Rank::Ten, Suit::Hearts));
        let text = grid.to_string();
        assert!(text.starts_with("TH -- -- -- --\n"));
        assert_eq!(text.lines().count(), SIZE);
    }
}
