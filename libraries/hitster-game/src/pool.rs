//! Deduplicated track pool

use hitster_core::{Track, TrackId};
use std::collections::HashMap;

/// Tracks available to one loaded game, indexed by id
///
/// Built once per load and never mutated afterwards; a reload replaces it.
#[derive(Debug, Clone, Default)]
pub struct TrackPool {
    /// Tracks in first-seen order
    tracks: Vec<Track>,

    /// Position of each id in `tracks`
    index: HashMap<TrackId, usize>,
}

impl TrackPool {
    /// Build a pool, keeping the first instance of any repeated id
    pub fn new(tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut pool = Self::default();
        for track in tracks {
            if !pool.index.contains_key(&track.id) {
                pool.index.insert(track.id.clone(), pool.tracks.len());
                pool.tracks.push(track);
            }
        }
        pool
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.index.get(id).map(|&i| &self.tracks[i])
    }

    /// Check if the pool holds `id`
    pub fn contains(&self, id: &TrackId) -> bool {
        self.index.contains_key(id)
    }

    /// All tracks (first-seen order)
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over the tracks
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if pool is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, name: &str) -> Track {
        Track::builder(TrackId::new(id), name).build()
    }

    #[test]
    fn first_instance_wins() {
        let pool = TrackPool::new(vec![track("a", "first"), track("b", "b"), track("a", "second")]);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(&TrackId::new("a")).unwrap().name, "first");
        assert_eq!(pool.tracks()[1].id, TrackId::new("b"));
    }

    #[test]
    fn lookup_missing_id() {
        let pool = TrackPool::new(vec![track("a", "a")]);
        assert!(pool.get(&TrackId::new("zzz")).is_none());
        assert!(!pool.contains(&TrackId::new("zzz")));
        assert!(pool.contains(&TrackId::new("a")));
    }

    #[test]
    fn default_pool_is_empty() {
        let pool = TrackPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
    }
}
