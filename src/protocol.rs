use crate::error::GameError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Commands sent by the UI layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Command {
    AddParticipant {
        name: String,
    },
    RemoveParticipant {
        index: usize,
    },
    /// Remove the first participant with this exact name
    RemoveParticipantNamed {
        name: String,
    },
    Start,
    Spin,
    /// Clear everything and go back to setup
    PlayAgain,
}

/// Events returned to the UI layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Event {
    ParticipantsChanged {
        participants: Vec<Participant>,
    },
    GameStarted {
        participants: Vec<Participant>,
    },
    SpinStarted {
        target_angle: f64,
        duration_ms: f64,
    },
    Eliminated {
        name: Participant,
        remaining: Vec<Participant>,
        message: String,
    },
    Winner {
        eliminated: Participant,
        name: Participant,
        message: String,
    },
    Reset,
    /// The command was refused; game state is unchanged
    Declined {
        code: String,
        msg: String,
    },
}

impl From<GameError> for Event {
    fn from(err: GameError) -> Self {
        Event::Declined {
            code: err.code().to_string(),
            msg: err.to_string(),
        }
    }
}

impl From<RoundOutcome> for Event {
    fn from(outcome: RoundOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            RoundOutcome::Eliminated { name, remaining } => Event::Eliminated {
                name,
                remaining,
                message,
            },
            RoundOutcome::Winner { eliminated, winner } => Event::Winner {
                eliminated,
                name: winner,
                message,
            },
        }
    }
}
