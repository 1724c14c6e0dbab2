//! Shared fixtures for session tests

#![allow(dead_code)]

use async_trait::async_trait;
use hitster_catalog::{CatalogError, PlaylistBatch, PlaylistSource};
use hitster_core::{Playlist, PlaylistId, Track, TrackId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory playlist source keyed by locator
#[derive(Default)]
pub struct FakeSource {
    playlists: HashMap<String, Playlist>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a playlist whose tracks have the given ids
    pub fn with_playlist(mut self, locator: &str, ids: &[&str]) -> Self {
        let tracks = ids
            .iter()
            .map(|id| create_test_track(id, &format!("{} from {}", id, locator)))
            .collect();
        let playlist = Playlist::new(PlaylistId::new(locator), locator, locator).with_tracks(tracks);
        self.playlists.insert(locator.to_string(), playlist);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaylistSource for FakeSource {
    async fn fetch_multiple_playlists(&self, locators: &[String]) -> PlaylistBatch {
        self.calls.fetch_add(1, Ordering::SeqCst);
        PlaylistBatch::from_results(locators.iter().map(|locator| {
            let result = self
                .playlists
                .get(locator)
                .cloned()
                .ok_or_else(|| CatalogError::CatalogRequestFailed {
                    status: 404,
                    status_text: "Not Found".to_string(),
                });
            (locator.clone(), result)
        }))
    }
}

pub fn create_test_track(id: &str, name: &str) -> Track {
    Track::builder(TrackId::new(id), name)
        .artist("Test Artist")
        .album("Test Album")
        .release_date("1999-12-31")
        .uri(format!("spotify:track:{}", id))
        .build()
}

pub fn locators(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
