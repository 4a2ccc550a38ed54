use thiserror::Error;

use crate::manager::GameId;
use crate::player::PlayerId;

/// Broad classes of failure reported by the engine.
///
/// Validation and capacity errors never change game state. Integrity errors
/// abort the current hand and refund every bet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    Capacity,
    Integrity,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    // validation
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("Player {0} already folded")]
    PlayerFolded(PlayerId),
    #[error("Player {0} cannot act (no chips or already all-in)")]
    PlayerInactive(PlayerId),
    #[error("Cannot check: bet {bet} does not match current bet {current_bet}")]
    CannotCheck { bet: u32, current_bet: u32 },
    #[error("Invalid raise to {amount}, must exceed current bet {current_bet}")]
    InvalidRaise { amount: u32, current_bet: u32 },
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} is already seated")]
    DuplicatePlayer(PlayerId),
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Betting round is still open")]
    BettingRoundOpen,
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("Invalid game options: {0}")]
    InvalidOptions(String),
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    // capacity
    #[error("Table is full ({max} players)")]
    TableFull { max: usize },
    #[error("A hand is in progress")]
    GameInProgress,
    #[error("Game is finished")]
    GameFinished,
    #[error("Buy-in {amount} outside allowed range {min}..={max}")]
    BuyInOutOfRange { amount: u32, min: u32, max: u32 },
    #[error("Not enough players with chips: {available} (need {required})")]
    NotEnoughPlayers { required: usize, available: usize },

    // integrity
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Chip total changed during hand: expected {expected}, found {actual}")]
    ChipsNotConserved { expected: u64, actual: u64 },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::TableFull { .. }
            | GameError::GameInProgress
            | GameError::GameFinished
            | GameError::BuyInOutOfRange { .. }
            | GameError::NotEnoughPlayers { .. } => ErrorKind::Capacity,
            GameError::EmptyDeck | GameError::ChipsNotConserved { .. } => ErrorKind::Integrity,
            _ => ErrorKind::Validation,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Integrity
    }
}
