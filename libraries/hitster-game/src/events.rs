//! Game Events
//!
//! Event-based communication for UI synchronization. The session queues
//! events as transitions happen; front-ends drain them after each call.

use serde::{Deserialize, Serialize};

/// Events emitted by a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A load replaced the pool
    PoolLoaded {
        /// Unique tracks in the new pool
        track_count: usize,
        /// Playlists that loaded
        playlist_count: usize,
        /// Locators that failed and were skipped
        failed_locators: Vec<String>,
    },

    /// A load produced no tracks; the previous pool is untouched
    LoadFailed {
        /// User-facing message
        message: String,
    },

    /// A new track was drawn; the player should start it
    TrackDrawn {
        /// ID of the drawn track
        track_id: String,
        /// Playable URI to hand to the player
        uri: String,
    },

    /// The current track's details were revealed
    TrackRevealed {
        /// ID of the revealed track
        track_id: String,
    },

    /// The current track was marked used
    TrackConsumed {
        /// ID of the consumed track
        track_id: String,
        /// Tracks still available
        remaining: usize,
    },

    /// A draw found nothing left to play
    PoolExhausted,

    /// Consumption was cleared; pool kept
    SessionReset,

    /// Pool and playlists were dropped
    PoolUnloaded,
}
