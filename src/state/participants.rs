use super::GameSession;
use crate::error::{GameError, GameResult};
use crate::types::*;
use crate::wheel::ColorMap;

/// Ordered participant list plus the colors handed out so far.
///
/// List order is display order and wedge order.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    names: Vec<Participant>,
    colors: ColorMap,
}

impl ParticipantStore {
    /// Append a trimmed name. Blank input is ignored; returns whether
    /// anything was added.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove the participant at `index`; later entries shift down
    pub fn remove_at(&mut self, index: usize) -> GameResult<Participant> {
        if index >= self.names.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    /// Remove the first entry equal to `name`, returning where it was
    pub fn remove_by_name(&mut self, name: &str) -> Option<usize> {
        let index = self.names.iter().position(|n| n == name)?;
        self.names.remove(index);
        Some(index)
    }

    /// Forget every participant and every color
    pub fn clear(&mut self) {
        self.names.clear();
        self.colors.clear();
    }

    pub fn names(&self) -> &[Participant] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Names and colors borrowed together, for reconfiguring the wheel
    pub(crate) fn parts_mut(&mut self) -> (&[Participant], &mut ColorMap) {
        (&self.names, &mut self.colors)
    }
}

impl GameSession {
    fn require_setup(&self, action: &'static str) -> GameResult<()> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::WrongPhase {
                action,
                phase: self.phase.clone(),
            });
        }
        Ok(())
    }

    /// Add a participant during setup
    pub fn add_participant(&mut self, name: &str) -> GameResult<bool> {
        self.require_setup("add participants")?;
        let added = self.store.add(name);
        if added {
            tracing::debug!("Added participant #{}: {}", self.store.len(), name.trim());
        }
        Ok(added)
    }

    /// Remove a participant by list position during setup
    pub fn remove_participant_at(&mut self, index: usize) -> GameResult<Participant> {
        self.require_setup("remove participants")?;
        let removed = self.store.remove_at(index).inspect_err(|e| {
            tracing::warn!("Rejected participant removal: {}", e);
        })?;
        tracing::debug!("Removed participant {} at {}", removed, index);
        Ok(removed)
    }

    /// Remove the first participant with this name during setup
    pub fn remove_participant_by_name(&mut self, name: &str) -> GameResult<Option<usize>> {
        self.require_setup("remove participants")?;
        Ok(self.store.remove_by_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(list: &[&str]) -> ParticipantStore {
        let mut store = ParticipantStore::default();
        for name in list {
            store.add(name);
        }
        store
    }

    #[test]
    fn test_add_trims_and_ignores_blank() {
        let mut store = ParticipantStore::default();

        assert!(store.add("  Alice \n"));
        assert!(!store.add(""));
        assert!(!store.add("   \t"));
        assert!(store.add("Alice"));

        assert_eq!(store.names(), &["Alice".to_string(), "Alice".to_string()]);
    }

    #[test]
    fn test_remove_at_shifts_and_validates() {
        let mut store = store_with(&["A", "B", "C"]);

        assert_eq!(store.remove_at(1), Ok("B".to_string()));
        assert_eq!(store.names(), &["A".to_string(), "C".to_string()]);

        assert_eq!(
            store.remove_at(2),
            Err(GameError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_by_name_takes_first_match() {
        let mut store = store_with(&["A", "B", "A"]);

        assert_eq!(store.remove_by_name("A"), Some(0));
        assert_eq!(store.names(), &["B".to_string(), "A".to_string()]);
        assert_eq!(store.remove_by_name("Z"), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_drops_names_and_colors() {
        let mut store = store_with(&["A", "B"]);
        let (names, colors) = store.parts_mut();
        colors.assign_missing(names, &mut rand::rng());
        assert_eq!(store.colors().len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert!(store.colors().is_empty());
    }

    #[test]
    fn test_session_edits_only_during_setup() {
        let mut session = GameSession::default();
        assert_eq!(session.add_participant("A"), Ok(true));
        assert_eq!(session.add_participant(" "), Ok(false));
        assert_eq!(session.add_participant("B"), Ok(true));
        session.start().unwrap();

        assert!(matches!(
            session.add_participant("C"),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            session.remove_participant_at(0),
            Err(GameError::WrongPhase { .. })
        ));
        assert_eq!(session.participants().len(), 2);
    }
}
