//! Types for catalog API requests and responses.

use hitster_core::{ReleaseYear, Track, TrackId};
use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Default catalog API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Largest page the catalog hands out for playlist items
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Configuration for connecting to the catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root (e.g., "https://api.spotify.com/v1")
    pub api_base_url: String,
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Items requested per page of a playlist listing
    pub page_limit: u32,
}

impl CatalogConfig {
    /// Create a config against the given API root with no token.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            access_token: None,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Create a config for the public catalog with an access token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::default()
        }
    }

    /// Override the access token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Override the page size.
    pub fn page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Playlist metadata as returned by `GET /playlists/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
}

/// One page of `GET /playlists/{id}/tracks`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PlaylistItem>,
    /// Absolute URL of the next page
    pub next: Option<String>,
}

/// Entry in a playlist listing; `track` is null for removed tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<CatalogTrack>,
}

// =============================================================================
// Track Types
// =============================================================================

/// A track as returned by the catalog.
///
/// Local files and removed tracks arrive with `null` in most fields; those
/// read as empty so the item can still be skipped by id.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogTrack {
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<CatalogArtist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: CatalogAlbum,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    pub preview_url: Option<String>,
}

/// Artist reference on a catalog track.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Album reference on a catalog track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogAlbum {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogTrack {
    /// Convert into a domain track, or `None` when the catalog sent no id.
    pub fn into_track(self) -> Option<Track> {
        let id = self.id.filter(|id| !id.is_empty())?;

        let track = Track::builder(TrackId::new(id), self.name)
            .artists(self.artists.iter().map(|a| a.name.as_str()))
            .album(self.album.name)
            .release_date(self.album.release_date)
            .uri(self.uri)
            .preview_url(self.preview_url)
            .build();

        if track.year == ReleaseYear::Unknown {
            warn!(
                track_id = %track.id,
                release_date = %track.release_date,
                "Could not derive release year"
            );
        }

        Some(track)
    }
}
