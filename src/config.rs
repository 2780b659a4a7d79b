//! Runtime configuration loaded from environment variables
//!
//! Every value has a default matching the classic game, so an empty
//! environment produces a playable wheel. Invalid values are logged and
//! ignored rather than aborting startup.

use crate::types::{MAX_TURNS, MIN_TURNS, SPECIAL_PARTICIPANT, SPIN_DURATION_MS};

/// Wheel behavior shared by the engine and the session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// How long one spin animates, in milliseconds
    pub spin_duration_ms: f64,
    /// Lower bound of full turns drawn per spin
    pub min_turns: f64,
    /// Upper bound of full turns drawn per spin
    pub max_turns: f64,
    /// Name that is never allowed to be the predicted elimination
    pub special_participant: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            special_participant: SPECIAL_PARTICIPANT.to_string(),
        }
    }
}

impl GameConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = positive_f64("WHEEL_SPIN_DURATION_MS") {
            config.spin_duration_ms = ms;
        }

        let min_turns = positive_f64("WHEEL_MIN_TURNS").unwrap_or(config.min_turns);
        let max_turns = positive_f64("WHEEL_MAX_TURNS").unwrap_or(config.max_turns);
        if min_turns <= max_turns {
            config.min_turns = min_turns;
            config.max_turns = max_turns;
        } else {
            tracing::warn!(
                "WHEEL_MIN_TURNS ({}) exceeds WHEEL_MAX_TURNS ({}), using defaults",
                min_turns,
                max_turns
            );
        }

        if let Ok(name) = std::env::var("WHEEL_SPECIAL_PARTICIPANT") {
            let name = name.trim();
            if name.is_empty() {
                tracing::warn!("WHEEL_SPECIAL_PARTICIPANT is empty, using default");
            } else {
                config.special_participant = name.to_string();
            }
        }

        config
    }
}

/// Settings for the headless host binary
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    /// Delay between rendered frames
    pub frame_interval_ms: u64,
    /// Fixed seed for reproducible spins (None = thread RNG)
    pub seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16, // ~60 fps
            seed: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("WHEEL_FRAME_INTERVAL_MS") {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.frame_interval_ms = ms,
                _ => tracing::warn!("Invalid WHEEL_FRAME_INTERVAL_MS '{}', using default", raw),
            }
        }

        if let Ok(raw) = std::env::var("WHEEL_SEED") {
            match raw.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => tracing::warn!("Invalid WHEEL_SEED '{}', ignoring", raw),
            }
        }

        config
    }
}

fn positive_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            tracing::warn!("Invalid {} '{}', using default", key, raw);
            None
        }
    }
}
