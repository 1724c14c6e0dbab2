//! Game session - drives the state machine
//!
//! Owns the current [`GameState`] and replaces it wholesale on every
//! transition. Network access goes through a [`PlaylistSource`].

use crate::{
    error::{GameError, Result},
    events::GameEvent,
    picker::{RandomPicker, TrackPicker},
    state::{GamePhase, GameState, GameStats},
};
use hitster_catalog::{LocatorFailure, PlaylistSource};
use hitster_core::Track;
use tracing::{debug, info, warn};

/// Message surfaced when a draw finds the pool used up
pub const NO_TRACKS_REMAINING: &str = "No more tracks available in the game";

/// Result of a successful load
#[derive(Debug)]
pub struct LoadSummary {
    /// Unique tracks in the new pool
    pub track_count: usize,
    /// Playlists that loaded
    pub playlist_count: usize,
    /// Locators that were skipped, with the reason
    pub failures: Vec<LocatorFailure>,
}

/// One game of Digital Hitster
///
/// Operations are meant to be called one at a time by a single driver.
/// `load` takes `&mut self` across its await, so nothing else can touch the
/// session while playlists are being fetched.
pub struct GameSession<S, P = RandomPicker> {
    /// Where playlists come from
    source: S,

    /// Draw index source
    picker: P,

    /// Current snapshot
    state: GameState,

    /// User-facing message from the last failed load or exhausted draw
    last_error: Option<String>,

    /// Events not yet drained by the front-end
    pending_events: Vec<GameEvent>,
}

impl<S: PlaylistSource> GameSession<S, RandomPicker> {
    /// Create a session with an entropy-seeded picker
    pub fn new(source: S) -> Self {
        Self::with_picker(source, RandomPicker::from_entropy())
    }
}

impl<S: PlaylistSource, P: TrackPicker> GameSession<S, P> {
    /// Create a session with a specific picker
    pub fn with_picker(source: S, picker: P) -> Self {
        Self {
            source,
            picker,
            state: GameState::empty(),
            last_error: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Commands =====

    /// Load playlists into a fresh pool
    ///
    /// Failed locators are skipped and reported in the summary. If nothing
    /// at all loads, fails with [`GameError::NoTracksFound`] and leaves the
    /// previous state untouched.
    pub async fn load(&mut self, locators: &[String]) -> Result<LoadSummary> {
        info!(locators = locators.len(), "Loading playlists");

        let batch = self.source.fetch_multiple_playlists(locators).await;

        if batch.tracks.is_empty() {
            let error = GameError::NoTracksFound {
                failures: batch.failures,
            };
            warn!(error = %error, "Load produced no tracks");
            let message = error.to_string();
            self.last_error = Some(message.clone());
            self.pending_events.push(GameEvent::LoadFailed { message });
            return Err(error);
        }

        let failed_locators: Vec<String> =
            batch.failures.iter().map(|f| f.locator.clone()).collect();

        self.state = GameState::loaded(batch.playlists, batch.tracks);
        self.last_error = None;

        let stats = self.state.stats();
        info!(
            tracks = stats.total_tracks,
            playlists = stats.playlist_count,
            failed = failed_locators.len(),
            "Pool loaded"
        );

        self.pending_events.push(GameEvent::PoolLoaded {
            track_count: stats.total_tracks,
            playlist_count: stats.playlist_count,
            failed_locators,
        });

        Ok(LoadSummary {
            track_count: stats.total_tracks,
            playlist_count: stats.playlist_count,
            failures: batch.failures,
        })
    }

    /// Draw a random track that has not been used yet
    ///
    /// Returns `None` once every track is used; that is the normal end of a
    /// game, reported through [`last_error`](Self::last_error) and a
    /// [`GameEvent::PoolExhausted`] event. Without a loaded pool it returns
    /// `None` and signals nothing.
    pub fn draw_random_track(&mut self) -> Option<Track> {
        let available = self.state.available_tracks();

        if self.state.pool().is_empty() {
            debug!("Draw ignored, no pool loaded");
            return None;
        }

        if available.is_empty() {
            info!("No tracks remaining");
            self.last_error = Some(NO_TRACKS_REMAINING.to_string());
            self.pending_events.push(GameEvent::PoolExhausted);
            return None;
        }

        let index = self.picker.pick(available.len()).min(available.len() - 1);
        let track = available[index].clone();

        debug!(
            track_id = %track.id,
            index,
            available = available.len(),
            "Drew track"
        );

        self.state = self.state.drawn(track.clone());
        self.pending_events.push(GameEvent::TrackDrawn {
            track_id: track.id.to_string(),
            uri: track.uri.clone(),
        });

        Some(track)
    }

    /// Reveal the current track (no-op without one)
    pub fn reveal_current_track(&mut self) {
        let Some(track_id) = self.state.current_track().map(|t| t.id.to_string()) else {
            debug!("Reveal ignored, no current track");
            return;
        };

        self.state = self.state.revealed();
        debug!(track_id = %track_id, "Revealed track");
        self.pending_events.push(GameEvent::TrackRevealed { track_id });
    }

    /// Mark the current track used and clear it (no-op without one)
    pub fn mark_current_track_used(&mut self) {
        let Some(track_id) = self.state.current_track().map(|t| t.id.to_string()) else {
            debug!("Mark used ignored, no current track");
            return;
        };

        self.state = self.state.consumed_current();
        let remaining = self.state.stats().remaining_tracks;

        debug!(track_id = %track_id, remaining, "Marked track used");
        self.pending_events.push(GameEvent::TrackConsumed {
            track_id,
            remaining,
        });
    }

    /// The "next song" action: finish the current track
    pub fn next_track(&mut self) {
        self.mark_current_track_used();
    }

    /// Start the game over with the same pool
    ///
    /// Clears consumption and the current track but keeps the pool and
    /// playlists. Use [`unload`](Self::unload) to drop those too.
    pub fn reset(&mut self) {
        self.state = self.state.restarted();
        self.last_error = None;
        info!(tracks = self.state.pool().len(), "Session reset");
        self.pending_events.push(GameEvent::SessionReset);
    }

    /// Drop everything and return to the empty state
    pub fn unload(&mut self) {
        self.state = GameState::empty();
        self.last_error = None;
        info!("Pool unloaded");
        self.pending_events.push(GameEvent::PoolUnloaded);
    }

    // ===== Queries =====

    /// Counters for the stats display
    pub fn stats(&self) -> GameStats {
        self.state.stats()
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Borrow the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clone the current state for an observer
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Track currently being played
    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track()
    }

    /// Whether the current track has been revealed
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Message for the last failed load or exhausted draw
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are events waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Borrow the playlist source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the playlist source (e.g. to refresh its token)
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
