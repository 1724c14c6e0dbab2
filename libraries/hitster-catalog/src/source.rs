//! Playlist source abstraction consumed by the session engine.

use crate::client::CatalogClient;
use crate::merge::PlaylistBatch;
use async_trait::async_trait;

/// Anything that can turn locators into a merged playlist batch.
///
/// [`CatalogClient`] is the production implementation; tests and offline
/// front-ends can provide their own.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Load every locator, merging tracks first-seen-wins and reporting failures
    async fn fetch_multiple_playlists(&self, locators: &[String]) -> PlaylistBatch;
}

#[async_trait]
impl PlaylistSource for CatalogClient {
    async fn fetch_multiple_playlists(&self, locators: &[String]) -> PlaylistBatch {
        CatalogClient::fetch_multiple_playlists(self, locators).await
    }
}
