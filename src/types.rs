use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Opaque ID types for type safety
pub type SessionId = String;

/// Participant names double as wedge labels; duplicates are allowed
pub type Participant = String;

/// Entry that can never be the predicted result of a spin
pub const SPECIAL_PARTICIPANT: &str = "Khulapov leather craft";

pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const MIN_TURNS: f64 = 6.0;
pub const MAX_TURNS: f64 = 12.0;

/// The pointer sits at the top of the wheel, expressed in the wheel's local frame
pub const POINTER_ANGLE: f64 = 1.5 * PI;

/// Wedge colors stay away from near-black and near-white so labels remain readable
pub const COLOR_CHANNEL_MIN: f64 = 50.0;
pub const COLOR_CHANNEL_MAX: f64 = 220.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex string, e.g. `#32a0dc`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "phase", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Participants are being added and removed
    Setup,
    /// The wheel exists and rounds are being spun
    Playing,
    Finished {
        winner: Participant,
    },
}

/// What happened when a spin came to rest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    Eliminated {
        name: Participant,
        remaining: Vec<Participant>,
    },
    /// The last elimination left a single participant standing
    Winner {
        eliminated: Participant,
        winner: Participant,
    },
}

impl RoundOutcome {
    pub fn eliminated(&self) -> &str {
        match self {
            RoundOutcome::Eliminated { name, .. } => name,
            RoundOutcome::Winner { eliminated, .. } => eliminated,
        }
    }

    /// Announcement shown to the room when a participant drops out
    pub fn message(&self) -> String {
        format!("{} выбывает!", self.eliminated())
    }
}
