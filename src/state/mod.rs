mod game;
mod participants;

pub use participants::ParticipantStore;

use crate::clock::{Clock, MonotonicClock};
use crate::config::GameConfig;
use crate::random::{RandomSource, RngSource};
use crate::types::*;
use crate::wheel::{ColorMap, WheelEngine};

/// One game from setup to winner.
///
/// Owns the participant list, the colors and, while playing, the wheel.
/// Everything runs on the caller's thread; the host drives it by sending
/// commands and calling [`GameSession::tick`] once per frame.
pub struct GameSession {
    pub id: SessionId,
    config: GameConfig,
    phase: GamePhase,
    store: ParticipantStore,
    /// Present only while the phase is `Playing`
    wheel: Option<WheelEngine>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_sources(
            config,
            Box::new(MonotonicClock::default()),
            Box::new(RngSource::thread()),
        )
    }

    /// Build a session with an injected clock and random source
    pub fn with_sources(
        config: GameConfig,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            config,
            phase: GamePhase::Setup,
            store: ParticipantStore::default(),
            wheel: None,
            clock,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn participants(&self) -> &[Participant] {
        self.store.names()
    }

    pub fn colors(&self) -> &ColorMap {
        self.store.colors()
    }

    pub fn wheel(&self) -> Option<&WheelEngine> {
        self.wheel.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.wheel.as_ref().is_some_and(|w| w.is_animating())
    }

    pub fn winner(&self) -> Option<&str> {
        match &self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("participants", &self.store.names())
            .field("spinning", &self.is_spinning())
            .finish()
    }
}
