//! Catalog HTTP client.

use crate::error::{CatalogError, Result};
use crate::locator::resolve_identifier;
use crate::merge::PlaylistBatch;
use crate::types::{CatalogConfig, CatalogTrack, PlaylistResponse, PlaylistTracksPage};
use hitster_core::{Playlist, PlaylistId, Track};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the remote music catalog.
///
/// Resolves playlist locators, walks paginated track listings and merges
/// several playlists into one deduplicated pool.
///
/// # Example
///
/// ```ignore
/// use hitster_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::with_token(token))?;
///
/// let batch = client
///     .fetch_multiple_playlists(&["spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"])
///     .await;
/// println!("{} tracks from {} playlists", batch.tracks.len(), batch.playlists.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
    page_limit: u32,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.api_base_url.is_empty() {
            return Err(CatalogError::InvalidBaseUrl("URL cannot be empty".into()));
        }

        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|e| CatalogError::InvalidBaseUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CatalogError::InvalidBaseUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("DigitalHitster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
            page_limit: config.page_limit.max(1),
        })
    }

    /// Get the catalog API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token (e.g. after the front-end refreshed it).
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Fetch the complete track listing of one playlist.
    ///
    /// Pages are requested one at a time, following `next` until the catalog
    /// stops returning one. Null placeholders and tracks without an id are
    /// skipped. Any failed page fails the whole listing.
    pub async fn fetch_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>> {
        let mut next = Some(format!(
            "{}/playlists/{}/tracks?limit={}",
            self.base_url, playlist_id, self.page_limit
        ));
        let mut tracks = Vec::new();
        let mut pages = 0usize;
        let mut skipped = 0usize;

        while let Some(url) = next.take() {
            debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist page");

            let page: PlaylistTracksPage = self.get_json(&url, "playlist tracks").await?;
            pages += 1;

            for item in page.items {
                match item.track.and_then(CatalogTrack::into_track) {
                    Some(track) => tracks.push(track),
                    None => skipped += 1,
                }
            }

            next = page.next;
        }

        debug!(
            playlist_id = %playlist_id,
            pages,
            tracks = tracks.len(),
            skipped,
            "Fetched playlist tracks"
        );

        Ok(tracks)
    }

    /// Fetch a playlist's metadata and full track listing.
    pub async fn fetch_playlist(&self, locator: &str) -> Result<Playlist> {
        let playlist_id = resolve_identifier(locator)
            .ok_or_else(|| CatalogError::InvalidLocator(locator.to_string()))?;

        let url = format!("{}/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist");

        let metadata: PlaylistResponse = self.get_json(&url, "playlist").await?;
        let tracks = self.fetch_tracks(&playlist_id).await?;

        info!(
            playlist_id = %playlist_id,
            name = %metadata.name,
            tracks = tracks.len(),
            "Fetched playlist"
        );

        Ok(Playlist::new(playlist_id, metadata.name, locator).with_tracks(tracks))
    }

    /// Fetch several playlists and merge their tracks.
    ///
    /// Locators are processed sequentially in the given order. A failing
    /// locator is logged and reported in [`PlaylistBatch::failures`]; it
    /// never stops the remaining ones.
    pub async fn fetch_multiple_playlists<S: AsRef<str>>(&self, locators: &[S]) -> PlaylistBatch {
        let mut results = Vec::with_capacity(locators.len());

        for locator in locators {
            let locator = locator.as_ref();
            let result = self.fetch_playlist(locator).await;
            if let Err(e) = &result {
                warn!(locator = %locator, error = %e, "Failed to fetch playlist");
            }
            results.push((locator.to_string(), result));
        }

        let batch = PlaylistBatch::from_results(results);

        info!(
            playlists = batch.playlists.len(),
            failed = batch.failures.len(),
            tracks = batch.tracks.len(),
            "Merged playlists"
        );

        batch
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse {} response: {}", what, e))
            })
        } else {
            Err(CatalogError::CatalogRequestFailed {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            })
        }
    }
}
