use crate::types::{Participant, Rgb, COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// Name → wedge color. A name keeps its color for the whole game, whatever
/// its position on the wheel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ColorMap {
    colors: HashMap<Participant, Rgb>,
}

impl ColorMap {
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Give every name without a color a random one.
    /// Returns how many names were newly colored.
    pub fn assign_missing<R: Rng>(
        &mut self,
        participants: &[Participant],
        rng: &mut R,
    ) -> usize {
        let mut assigned = 0;
        for name in participants {
            if self.colors.contains_key(name) {
                continue;
            }
            let color = random_color(rng);
            tracing::debug!("Assigned color {} to {}", color.to_hex(), name);
            self.colors.insert(name.clone(), color);
            assigned += 1;
        }
        assigned
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Rgb)> {
        self.colors.iter()
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    let mut channel = || rng.random_range(COLOR_CHANNEL_MIN..COLOR_CHANNEL_MAX).floor() as u8;
    Rgb::new(channel(), channel(), channel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<Participant> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_colors_are_stable_across_assignments() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut colors = ColorMap::default();

        assert_eq!(colors.assign_missing(&names(&["A", "B", "C"]), &mut rng), 3);
        let a = colors.get("A").unwrap();
        let c = colors.get("C").unwrap();

        // reordered, shrunk, with a newcomer
        assert_eq!(colors.assign_missing(&names(&["C", "D", "A"]), &mut rng), 1);
        assert_eq!(colors.get("A"), Some(a));
        assert_eq!(colors.get("C"), Some(c));
        assert!(colors.contains("D"));
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn test_duplicates_share_one_color() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut colors = ColorMap::default();

        assert_eq!(colors.assign_missing(&names(&["A", "A"]), &mut rng), 1);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn test_channels_stay_in_readable_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let color = random_color(&mut rng);
            for channel in [color.r, color.g, color.b] {
                assert!((50..220).contains(&channel));
            }
        }
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut colors = ColorMap::default();
        colors.assign_missing(&names(&["A"]), &mut rng);
        colors.clear();
        assert!(colors.is_empty());
        assert_eq!(colors.get("A"), None);
    }
}
