//! Game state as an immutable value
//!
//! Every transition returns a new [`GameState`]; the pool and playlists are
//! shared behind `Arc`, so snapshots are cheap to hand to observers.

use crate::pool::TrackPool;
use hitster_core::{Playlist, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Observable phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No pool loaded
    Empty,
    /// Pool loaded, nothing drawn, tracks remaining
    Idle,
    /// A track is drawn and hidden
    Playing,
    /// The drawn track has been revealed
    Revealed,
    /// Every track in the pool has been used
    Exhausted,
}

/// Numbers for the stats display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub total_tracks: usize,
    pub used_tracks: usize,
    pub remaining_tracks: usize,
    pub playlist_count: usize,
}

/// Snapshot of one game session
///
/// Invariants kept by the transitions:
/// - every consumed id is in the pool
/// - the current track is in the pool and not consumed
/// - `revealed` is false whenever there is no current track
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pool: Arc<TrackPool>,
    playlists: Arc<Vec<Playlist>>,
    consumed: Arc<HashSet<TrackId>>,
    current: Option<Track>,
    revealed: bool,
}

impl GameState {
    /// State with nothing loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Freshly loaded state: new pool, nothing consumed, nothing drawn
    pub fn loaded(playlists: Vec<Playlist>, tracks: Vec<Track>) -> Self {
        Self {
            pool: Arc::new(TrackPool::new(tracks)),
            playlists: Arc::new(playlists),
            consumed: Arc::default(),
            current: None,
            revealed: false,
        }
    }

    // ===== Transitions =====

    /// Make `track` the current, hidden track.
    ///
    /// Ignored when the track is not in the pool or already consumed.
    pub fn drawn(&self, track: Track) -> Self {
        if !self.pool.contains(&track.id) || self.consumed.contains(&track.id) {
            return self.clone();
        }

        Self {
            current: Some(track),
            revealed: false,
            ..self.clone()
        }
    }

    /// Reveal the current track (no change without one)
    pub fn revealed(&self) -> Self {
        Self {
            revealed: self.current.is_some(),
            ..self.clone()
        }
    }

    /// Consume the current track and clear it (no change without one)
    pub fn consumed_current(&self) -> Self {
        let Some(current) = &self.current else {
            return self.clone();
        };

        let mut consumed = (*self.consumed).clone();
        consumed.insert(current.id.clone());

        Self {
            pool: Arc::clone(&self.pool),
            playlists: Arc::clone(&self.playlists),
            consumed: Arc::new(consumed),
            current: None,
            revealed: false,
        }
    }

    /// Back to freshly loaded: keeps pool and playlists, forgets consumption
    pub fn restarted(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            playlists: Arc::clone(&self.playlists),
            consumed: Arc::default(),
            current: None,
            revealed: false,
        }
    }

    // ===== Queries =====

    /// The loaded pool
    pub fn pool(&self) -> &TrackPool {
        &self.pool
    }

    /// Playlists from the last successful load
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Track currently being played
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether the current track has been revealed
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether `id` has been used this game
    pub fn is_consumed(&self, id: &TrackId) -> bool {
        self.consumed.contains(id)
    }

    /// Pool tracks not yet consumed, in pool order
    ///
    /// The current track is still available: it is not used until consumed.
    pub fn available_tracks(&self) -> Vec<&Track> {
        self.pool
            .iter()
            .filter(|t| !self.consumed.contains(&t.id))
            .collect()
    }

    /// Derived counters
    pub fn stats(&self) -> GameStats {
        let total_tracks = self.pool.len();
        let used_tracks = self.consumed.len();
        GameStats {
            total_tracks,
            used_tracks,
            remaining_tracks: total_tracks - used_tracks,
            playlist_count: self.playlists.len(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        if self.pool.is_empty() {
            GamePhase::Empty
        } else if self.current.is_some() {
            if self.revealed {
                GamePhase::Revealed
            } else {
                GamePhase::Playing
            }
        } else if self.consumed.len() == self.pool.len() {
            GamePhase::Exhausted
        } else {
            GamePhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitster_core::PlaylistId;

    fn track(id: &str) -> Track {
        Track::builder(TrackId::new(id), id).build()
    }

    fn loaded(ids: &[&str]) -> GameState {
        let playlist = Playlist::new(PlaylistId::new("p"), "P", "p");
        GameState::loaded(vec![playlist], ids.iter().map(|id| track(id)).collect())
    }

    #[test]
    fn empty_state() {
        let state = GameState::empty();
        assert_eq!(state.phase(), GamePhase::Empty);
        assert_eq!(state.stats(), GameStats::default());
        assert!(state.current_track().is_none());
    }

    #[test]
    fn full_round_trip_through_phases() {
        let state = loaded(&["a", "b"]);
        assert_eq!(state.phase(), GamePhase::Idle);

        let state = state.drawn(track("a"));
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(!state.is_revealed());

        let state = state.revealed();
        assert_eq!(state.phase(), GamePhase::Revealed);

        let state = state.consumed_current();
        assert_eq!(state.phase(), GamePhase::Idle);
        assert!(state.is_consumed(&TrackId::new("a")));
        assert!(!state.is_revealed());

        let state = state.drawn(track("b")).consumed_current();
        assert_eq!(state.phase(), GamePhase::Exhausted);
        assert_eq!(state.stats().remaining_tracks, 0);
    }

    #[test]
    fn transitions_do_not_touch_previous_value() {
        let before = loaded(&["a"]);
        let after = before.drawn(track("a")).consumed_current();

        assert_eq!(before.stats().used_tracks, 0);
        assert_eq!(after.stats().used_tracks, 1);
    }

    #[test]
    fn reveal_without_current_is_noop() {
        let state = loaded(&["a"]).revealed();
        assert!(!state.is_revealed());
        assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn consume_without_current_is_noop() {
        let state = loaded(&["a"]).consumed_current();
        assert_eq!(state.stats().used_tracks, 0);
    }

    #[test]
    fn drawing_foreign_or_consumed_track_is_ignored() {
        let state = loaded(&["a"]).drawn(track("zzz"));
        assert!(state.current_track().is_none());

        let state = loaded(&["a"]).drawn(track("a")).consumed_current();
        let state = state.drawn(track("a"));
        assert!(state.current_track().is_none());
    }

    #[test]
    fn restart_keeps_pool() {
        let state = loaded(&["a", "b"])
            .drawn(track("a"))
            .consumed_current()
            .drawn(track("b"))
            .revealed()
            .restarted();

        let stats = state.stats();
        assert_eq!(stats.total_tracks, 2);
        assert_eq!(stats.used_tracks, 0);
        assert_eq!(stats.playlist_count, 1);
        assert!(state.current_track().is_none());
        assert!(!state.is_revealed());
    }

    #[test]
    fn available_excludes_consumed_only() {
        let state = loaded(&["a", "b", "c"]).drawn(track("b"));
        assert_eq!(state.available_tracks().len(), 3);

        let state = state.consumed_current();
        let ids: Vec<&str> = state.available_tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
