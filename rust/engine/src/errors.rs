use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Position ({row}, {col}) is outside the 5x5 grid")]
    PositionOutOfRange { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Point table must have {expected} entries, got {actual}")]
    InvalidPointTable { expected: usize, actual: usize },
    #[error("Unknown point system: {0}")]
    UnknownPointSystem(String),
}
