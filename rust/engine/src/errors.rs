use thiserror::Error;

use crate::engine::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: i64, minimum: u32 },
    #[error("Insufficient chips: bet {bet} exceeds total {total}")]
    InsufficientChips { bet: u32, total: u32 },
    #[error("No chips left to bet")]
    OutOfChips,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Action not allowed during {actual:?} (expected {expected:?})")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("Round already settled")]
    RoundAlreadySettled,
}
