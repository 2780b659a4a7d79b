//! The spinning wheel: rotation state, spin animation and landing selection
//!
//! The engine is driven from outside. `spin` plans a rotation, `advance` is
//! called once per rendered frame with the current time, and the frame on
//! which the animation ends returns the wedge under the pointer.

mod animation;
mod colors;
mod geometry;

pub use animation::{compute_angle, ease_out_quint, lerp};
pub use colors::ColorMap;
pub use geometry::{arc_size, landing_index, layout, settle_into, Wedge};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::random::RandomSource;
use crate::types::Participant;
use serde::Serialize;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSpin {
    start_angle: f64,
    target_angle: f64,
    start_time: f64,
}

/// What `spin` decided before the animation starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinPlan {
    pub start_angle: f64,
    pub target_angle: f64,
    /// Full turns drawn for this spin
    pub turns: f64,
    /// Wedge under the pointer at the raw draw, before any override
    pub predicted_index: usize,
    /// True when the raw draw hit the special entry and was pushed one wedge on
    pub overridden: bool,
}

/// The wedge the wheel came to rest on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landing {
    pub index: usize,
    pub name: Participant,
}

#[derive(Debug, Clone)]
pub struct WheelEngine {
    participants: Vec<Participant>,
    /// Only ever moves forward; carried over from one spin to the next
    current_angle: f64,
    spin: Option<ActiveSpin>,
    spin_duration_ms: f64,
    min_turns: f64,
    max_turns: f64,
    special_participant: String,
}

impl WheelEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            participants: Vec::new(),
            current_angle: 0.0,
            spin: None,
            spin_duration_ms: config.spin_duration_ms,
            min_turns: config.min_turns,
            max_turns: config.max_turns,
            special_participant: config.special_participant.clone(),
        }
    }

    /// Replace the wheel's participants and color any newcomers.
    ///
    /// The angle and existing colors are kept. Rejected while a spin is
    /// animating so the list a spin resolves against cannot change under it.
    pub fn configure(
        &mut self,
        participants: &[Participant],
        colors: &mut ColorMap,
    ) -> GameResult<()> {
        if self.is_animating() {
            return Err(GameError::SpinInProgress);
        }

        self.participants = participants.to_vec();
        let assigned = colors.assign_missing(&self.participants, &mut rand::rng());
        tracing::debug!(
            "Wheel configured with {} wedges ({} new colors)",
            self.participants.len(),
            assigned
        );
        Ok(())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn is_animating(&self) -> bool {
        self.spin.is_some()
    }

    /// Angle the running spin will stop at
    pub fn spin_target(&self) -> Option<f64> {
        self.spin.map(|s| s.target_angle)
    }

    pub fn arc_size(&self) -> f64 {
        arc_size(self.participants.len())
    }

    pub fn wedges(&self, colors: &ColorMap) -> Vec<Wedge> {
        layout(&self.participants, colors)
    }

    /// Participant under the pointer if the wheel rested at `angle`
    pub fn landing_at(&self, angle: f64) -> Option<Landing> {
        if self.participants.is_empty() {
            return None;
        }
        let index = landing_index(angle, self.participants.len());
        Some(Landing {
            index,
            name: self.participants[index].clone(),
        })
    }

    /// Participant under the pointer right now
    pub fn resolve(&self) -> Option<Landing> {
        self.landing_at(self.current_angle)
    }

    /// Start a spin. Declined without touching any state if a spin is
    /// already running or fewer than two participants are on the wheel.
    pub fn spin(&mut self, rng: &mut dyn RandomSource, now_ms: f64) -> GameResult<SpinPlan> {
        if self.is_animating() {
            return Err(GameError::SpinInProgress);
        }

        let count = self.participants.len();
        if count < 2 {
            return Err(GameError::InsufficientParticipants { count });
        }

        let turns = rng.uniform(self.min_turns..=self.max_turns);
        let mut target_angle = self.current_angle + turns * TAU;

        let predicted_index = landing_index(target_angle, count);
        let overridden = count > 1 && self.participants[predicted_index] == self.special_participant;
        if overridden {
            let next_index = (predicted_index + count - 1) % count;
            target_angle = settle_into(target_angle + arc_size(count), count, next_index);
            tracing::info!(
                "Spin would stop on {}, moving on to the next wedge",
                self.special_participant
            );
        }

        let plan = SpinPlan {
            start_angle: self.current_angle,
            target_angle,
            turns,
            predicted_index,
            overridden,
        };

        self.spin = Some(ActiveSpin {
            start_angle: self.current_angle,
            target_angle,
            start_time: now_ms,
        });

        tracing::info!(
            "Spin started: {:.2} turns over {} wedges, target angle {:.4}",
            turns,
            count,
            target_angle
        );
        Ok(plan)
    }

    /// Per-frame update. Returns the landing on the frame the spin ends.
    pub fn advance(&mut self, now_ms: f64) -> Option<Landing> {
        let spin = self.spin?;
        let elapsed = now_ms - spin.start_time;

        if elapsed < self.spin_duration_ms {
            self.current_angle = compute_angle(
                spin.start_angle,
                spin.target_angle,
                elapsed,
                self.spin_duration_ms,
            );
            return None;
        }

        self.current_angle = spin.target_angle;
        self.spin = None;

        let landing = self.resolve();
        if let Some(ref l) = landing {
            tracing::info!("Wheel stopped on wedge {}: {}", l.index, l.name);
        }
        landing
    }
}
