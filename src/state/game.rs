use super::GameSession;
use crate::error::{GameError, GameResult};
use crate::types::*;
use crate::wheel::{SpinPlan, WheelEngine};

impl GameSession {
    /// Check if a phase transition is valid
    fn is_valid_phase_transition(from: &GamePhase, to: &GamePhase) -> bool {
        use GamePhase::*;

        match (from, to) {
            (Setup, Playing) => true,
            (Playing, Finished { .. }) => true,
            // Play again / reset from anywhere
            (_, Setup) => true,
            _ => false,
        }
    }

    fn transition_phase(&mut self, new_phase: GamePhase) -> GameResult<()> {
        if !Self::is_valid_phase_transition(&self.phase, &new_phase) {
            return Err(GameError::InvalidPhase {
                from: self.phase.clone(),
                to: new_phase,
            });
        }
        tracing::debug!(
            "Session {} phase {:?} -> {:?}",
            self.id,
            self.phase,
            new_phase
        );
        self.phase = new_phase;
        Ok(())
    }

    /// Leave setup and put the participants on a wheel
    pub fn start(&mut self) -> GameResult<()> {
        let count = self.store.len();
        if self.phase == GamePhase::Setup && count < 2 {
            return Err(GameError::InsufficientParticipants { count });
        }
        self.transition_phase(GamePhase::Playing)?;

        let mut wheel = WheelEngine::new(&self.config);
        let (names, colors) = self.store.parts_mut();
        wheel.configure(names, colors)?;
        self.wheel = Some(wheel);

        tracing::info!("Session {} started with {} participants", self.id, count);
        Ok(())
    }

    /// Ask the wheel to spin now
    pub fn spin(&mut self) -> GameResult<SpinPlan> {
        let now = self.clock.now_ms();
        let Some(wheel) = self.wheel.as_mut() else {
            return Err(GameError::WrongPhase {
                action: "spin",
                phase: self.phase.clone(),
            });
        };
        wheel.spin(self.rng.as_mut(), now).inspect_err(|e| {
            tracing::debug!("Spin declined: {}", e);
        })
    }

    /// Per-frame update.
    ///
    /// On the frame a spin comes to rest the landed participant is removed
    /// and the outcome returned; the game finishes once one name is left.
    pub fn tick(&mut self) -> Option<RoundOutcome> {
        let now = self.clock.now_ms();
        let landing = self.wheel.as_mut()?.advance(now)?;

        // The list is frozen during play; still report the landing if it was not
        if self.store.remove_by_name(&landing.name).is_none() {
            tracing::error!("Landed on {} but it is not in the list", landing.name);
        }

        if self.store.len() == 1 {
            let winner = self.store.names()[0].clone();
            if let Err(e) = self.transition_phase(GamePhase::Finished {
                winner: winner.clone(),
            }) {
                tracing::error!("Failed to finish game: {}", e);
            }
            self.wheel = None;
            tracing::info!("{} eliminated, {} wins", landing.name, winner);
            return Some(RoundOutcome::Winner {
                eliminated: landing.name,
                winner,
            });
        }

        if let Some(wheel) = self.wheel.as_mut() {
            let (names, colors) = self.store.parts_mut();
            if let Err(e) = wheel.configure(names, colors) {
                tracing::error!("Failed to update wheel: {}", e);
            }
        }

        tracing::info!(
            "{} eliminated, {} remaining",
            landing.name,
            self.store.len()
        );
        Some(RoundOutcome::Eliminated {
            name: landing.name,
            remaining: self.store.names().to_vec(),
        })
    }

    /// Drop the wheel, the participants and their colors, back to setup
    pub fn reset(&mut self) {
        self.wheel = None;
        self.store.clear();
        // Every phase may return to setup
        self.phase = GamePhase::Setup;
        tracing::info!("Session {} reset", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::GameConfig;
    use crate::random::ScriptedSource;

    fn session_with(list: &[&str], draws: &[f64]) -> (GameSession, ManualClock) {
        let clock = ManualClock::new();
        let mut session = GameSession::with_sources(
            GameConfig::default(),
            Box::new(clock.clone()),
            Box::new(ScriptedSource::new(draws.iter().copied())),
        );
        for name in list {
            session.add_participant(name).unwrap();
        }
        (session, clock)
    }

    fn finish_spin(session: &mut GameSession, clock: &ManualClock) -> RoundOutcome {
        for _ in 0..1000 {
            clock.advance(16.0);
            if let Some(outcome) = session.tick() {
                return outcome;
            }
        }
        panic!("spin never finished");
    }

    #[test]
    fn test_valid_phase_transitions() {
        use GamePhase::*;
        let finished = Finished {
            winner: "A".to_string(),
        };

        assert!(GameSession::is_valid_phase_transition(&Setup, &Playing));
        assert!(GameSession::is_valid_phase_transition(&Playing, &finished));
        assert!(GameSession::is_valid_phase_transition(&finished, &Setup));
        assert!(GameSession::is_valid_phase_transition(&Playing, &Setup));

        assert!(!GameSession::is_valid_phase_transition(&Setup, &finished));
        assert!(!GameSession::is_valid_phase_transition(&finished, &Playing));
        assert!(!GameSession::is_valid_phase_transition(&Playing, &Playing));
    }

    #[test]
    fn test_start_requires_two_participants() {
        let (mut session, _) = session_with(&["Solo"], &[]);

        assert_eq!(
            session.start(),
            Err(GameError::InsufficientParticipants { count: 1 })
        );
        assert_eq!(session.phase(), &GamePhase::Setup);
        assert!(session.wheel().is_none());
    }

    #[test]
    fn test_start_twice_is_invalid() {
        let (mut session, _) = session_with(&["A", "B"], &[]);
        session.start().unwrap();

        assert!(matches!(
            session.start(),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn test_spin_before_start_is_declined() {
        let (mut session, _) = session_with(&["A", "B"], &[]);
        assert!(matches!(
            session.spin(),
            Err(GameError::WrongPhase { action: "spin", .. })
        ));
    }

    #[test]
    fn test_round_removes_landed_participant() {
        let (mut session, clock) = session_with(&["A", "B", "C", "D"], &[8.125]);
        session.start().unwrap();
        let colors_before = session.colors().get("A");

        session.spin().unwrap();
        assert!(session.is_spinning());
        assert!(session.tick().is_none());

        let outcome = finish_spin(&mut session, &clock);
        assert_eq!(
            outcome,
            RoundOutcome::Eliminated {
                name: "C".to_string(),
                remaining: vec!["A".to_string(), "B".to_string(), "D".to_string()],
            }
        );
        assert_eq!(outcome.message(), "C выбывает!");

        let wheel = session.wheel().unwrap();
        assert_eq!(wheel.participants().len(), 3);
        assert_eq!(wheel.current_angle(), 8.125 * std::f64::consts::TAU);
        assert_eq!(session.colors().get("A"), colors_before);
        assert_eq!(session.phase(), &GamePhase::Playing);
    }

    #[test]
    fn test_duplicates_lose_one_entry_per_round() {
        let (mut session, clock) = session_with(&["A", "A", "B"], &[8.25]);
        session.start().unwrap();
        session.spin().unwrap();

        // 8.25 turns put the pointer over the middle wedge of three
        let outcome = finish_spin(&mut session, &clock);
        assert_eq!(outcome.eliminated(), "A");
        assert_eq!(session.participants(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_last_two_produce_winner() {
        let (mut session, clock) = session_with(&["A", "B"], &[8.0]);
        session.start().unwrap();
        session.spin().unwrap();

        // two wedges, pointer at 1.5π: the second half
        let outcome = finish_spin(&mut session, &clock);
        assert_eq!(
            outcome,
            RoundOutcome::Winner {
                eliminated: "B".to_string(),
                winner: "A".to_string(),
            }
        );
        assert_eq!(session.winner(), Some("A"));
        assert!(session.wheel().is_none());
        assert!(matches!(session.spin(), Err(GameError::WrongPhase { .. })));
        assert!(session.tick().is_none());
    }

    #[test]
    fn test_landing_is_reported_even_if_name_vanished() {
        let (mut session, clock) = session_with(&["A", "B", "C", "D"], &[8.125]);
        session.start().unwrap();
        session.spin().unwrap();

        // out-of-band edit while the wheel still shows C
        session.store.remove_by_name("C");

        let outcome = finish_spin(&mut session, &clock);
        assert_eq!(
            outcome,
            RoundOutcome::Eliminated {
                name: "C".to_string(),
                remaining: vec!["A".to_string(), "B".to_string(), "D".to_string()],
            }
        );
        assert_eq!(session.wheel().unwrap().participants().len(), 3);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut session, clock) = session_with(&["A", "B"], &[8.0]);
        session.start().unwrap();
        session.spin().unwrap();
        finish_spin(&mut session, &clock);

        session.reset();
        assert_eq!(session.phase(), &GamePhase::Setup);
        assert!(session.participants().is_empty());
        assert!(session.colors().is_empty());
        assert!(session.wheel().is_none());

        assert_eq!(session.add_participant("C"), Ok(true));
    }
}
