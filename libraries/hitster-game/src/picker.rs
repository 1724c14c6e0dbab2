//! Random track selection
//!
//! The session asks a [`TrackPicker`] for an index into the currently
//! available tracks, so tests can script the exact draw order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of draw indices
pub trait TrackPicker: Send {
    /// Pick an index in `0..available`. `available` is never zero.
    fn pick(&mut self, available: usize) -> usize;
}

impl<P: TrackPicker + ?Sized> TrackPicker for Box<P> {
    fn pick(&mut self, available: usize) -> usize {
        (**self).pick(available)
    }
}

/// Uniform picker backed by a general-purpose RNG
///
/// Every available track has probability `1 / available`.
/// Not cryptographically strong, and it does not need to be.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Picker with a fixed seed (replayable games)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPicker<R> {
    /// Wrap an existing RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPicker<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng + Send> TrackPicker for RandomPicker<R> {
    fn pick(&mut self, available: usize) -> usize {
        self.rng.gen_range(0..available)
    }
}

/// Picker replaying a fixed sequence of indices
///
/// Each index is reduced modulo the available count. Once the script runs
/// out it keeps picking the first available track.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    picks: VecDeque<usize>,
}

impl ScriptedPicker {
    /// Create a picker from the indices to return, in order
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Indices not yet consumed
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl TrackPicker for ScriptedPicker {
    fn pick(&mut self, available: usize) -> usize {
        self.picks.pop_front().map_or(0, |i| i % available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_picker_stays_in_range() {
        let mut picker = RandomPicker::seeded(7);
        for available in 1..50 {
            for _ in 0..20 {
                assert!(picker.pick(available) < available);
            }
        }
    }

    #[test]
    fn random_picker_reaches_every_index() {
        let mut picker = RandomPicker::seeded(42);
        let seen: HashSet<usize> = (0..500).map(|_| picker.pick(5)).collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn seeded_pickers_agree() {
        let mut a = RandomPicker::seeded(1234);
        let mut b = RandomPicker::seeded(1234);
        let left: Vec<usize> = (0..20).map(|_| a.pick(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn single_track_is_always_picked() {
        let mut picker = RandomPicker::from_entropy();
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn scripted_picker_replays_then_falls_back() {
        let mut picker = ScriptedPicker::new([2, 7, 1]);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.pick(5), 2); // 7 % 5
        assert_eq!(picker.remaining(), 1);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(picker.pick(5), 0);
    }

    #[test]
    fn boxed_picker_delegates() {
        let mut picker: Box<dyn TrackPicker> = Box::new(ScriptedPicker::new([3]));
        assert_eq!(picker.pick(4), 3);
    }
}
