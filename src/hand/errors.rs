use thiserror::Error;

/// Errors that can occur when building a hand
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandError {
    #[error("A hand holds exactly 4 cards, got {0}")]
    WrongSize(usize),
    #[error("Card rank must be between 1 and 13, got {0}")]
    RankOutOfRange(u32),
    #[error("Card rank is not a number: {0}")]
    NotANumber(String),
}
