use crate::types::GamePhase;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors surfaced to whoever drives the game.
///
/// None of these leave state half-applied: a declined operation is a no-op.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("Index {index} is out of range for {len} participants")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("At least two participants are required, found {count}")]
    InsufficientParticipants { count: usize },

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("Invalid phase transition from {from:?} to {to:?}")]
    InvalidPhase { from: GamePhase, to: GamePhase },

    #[error("Cannot {action} while the game is in {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },
}

impl GameError {
    /// Stable machine-readable code for protocol responses
    pub fn code(&self) -> &'static str {
        match self {
            GameError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            GameError::InsufficientParticipants { .. } => "INSUFFICIENT_PARTICIPANTS",
            GameError::SpinInProgress => "SPIN_IN_PROGRESS",
            GameError::InvalidPhase { .. } | GameError::WrongPhase { .. } => "INVALID_PHASE",
        }
    }
}
