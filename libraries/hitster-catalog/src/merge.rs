//! Merging several playlists into one deduplicated track list.

use crate::error::{CatalogError, Result};
use hitster_core::{Playlist, Track};
use std::collections::HashSet;

/// Union of the playlists' tracks, first occurrence wins.
///
/// Order is first-seen order across `playlists` in the given order. A later
/// duplicate never overwrites the fields of the kept instance.
pub fn merge_tracks(playlists: &[Playlist]) -> Vec<Track> {
    let mut seen = HashSet::new();
    playlists
        .iter()
        .flat_map(|p| p.tracks.iter())
        .filter(|t| seen.insert(t.id.clone()))
        .cloned()
        .collect()
}

/// A locator that could not be loaded, and why.
#[derive(Debug)]
pub struct LocatorFailure {
    pub locator: String,
    pub error: CatalogError,
}

/// Outcome of loading several playlists.
///
/// Failures are reported next to the successes instead of aborting the
/// batch; an empty `tracks` list is for the caller to judge.
#[derive(Debug, Default)]
pub struct PlaylistBatch {
    /// Loaded playlists in input order
    pub playlists: Vec<Playlist>,
    /// Deduplicated tracks in first-seen order
    pub tracks: Vec<Track>,
    /// Locators that failed, in input order
    pub failures: Vec<LocatorFailure>,
}

impl PlaylistBatch {
    /// Assemble a batch from per-locator results.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<Playlist>)>,
    {
        let mut playlists = Vec::new();
        let mut failures = Vec::new();

        for (locator, result) in results {
            match result {
                Ok(playlist) => playlists.push(playlist),
                Err(error) => failures.push(LocatorFailure { locator, error }),
            }
        }

        let tracks = merge_tracks(&playlists);

        Self {
            playlists,
            tracks,
            failures,
        }
    }

    /// Check if every locator failed or every playlist was empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
