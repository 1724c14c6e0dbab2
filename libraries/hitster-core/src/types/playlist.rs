/// Playlist domain type
use super::ids::PlaylistId;
use super::track::Track;
use serde::{Deserialize, Serialize};

/// A catalog playlist with its full track listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Bare catalog identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Locator exactly as the caller supplied it (URL, URI or bare id)
    pub source: String,

    /// Tracks in catalog order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(id: PlaylistId, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            source: source.into(),
            tracks: Vec::new(),
        }
    }

    /// Attach the track listing
    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = tracks;
        self
    }

    /// Number of tracks in the listing
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
