//! Command dispatch
//!
//! The single entry point the UI layer talks to. Every command maps to at
//! most one event; refusals come back as `Event::Declined` instead of errors
//! so a UI can show them without special handling.

use crate::protocol::{Command, Event};
use crate::state::GameSession;

/// Handle a command and return the event to show, if any
pub fn handle_command(cmd: Command, session: &mut GameSession) -> Option<Event> {
    match cmd {
        Command::AddParticipant { name } => match session.add_participant(&name) {
            Ok(true) => Some(participants_changed(session)),
            // Blank names are dropped silently
            Ok(false) => None,
            Err(e) => Some(e.into()),
        },

        Command::RemoveParticipant { index } => match session.remove_participant_at(index) {
            Ok(_) => Some(participants_changed(session)),
            Err(e) => Some(e.into()),
        },

        Command::RemoveParticipantNamed { name } => {
            match session.remove_participant_by_name(&name) {
                Ok(Some(_)) => Some(participants_changed(session)),
                Ok(None) => None,
                Err(e) => Some(e.into()),
            }
        }

        Command::Start => match session.start() {
            Ok(()) => Some(Event::GameStarted {
                participants: session.participants().to_vec(),
            }),
            Err(e) => {
                tracing::info!("Start declined: {}", e);
                Some(e.into())
            }
        },

        Command::Spin => match session.spin() {
            Ok(plan) => Some(Event::SpinStarted {
                target_angle: plan.target_angle,
                duration_ms: session.config().spin_duration_ms,
            }),
            Err(e) => Some(e.into()),
        },

        Command::PlayAgain => {
            session.reset();
            Some(Event::Reset)
        }
    }
}

/// Advance one frame; returns the elimination event when a spin finishes
pub fn handle_frame(session: &mut GameSession) -> Option<Event> {
    session.tick().map(Event::from)
}

fn participants_changed(session: &GameSession) -> Event {
    Event::ParticipantsChanged {
        participants: session.participants().to_vec(),
    }
}
