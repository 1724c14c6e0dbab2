//! Digital Hitster Catalog Client
//!
//! Turns playlist locators into a merged, deduplicated track pool.
//!
//! # Features
//!
//! - **Locators**: bare ids, `spotify:playlist:<id>` URIs and share URLs
//! - **Pagination**: listings are followed page by page until exhausted
//! - **Merging**: several playlists become one pool, first occurrence wins
//! - **Partial success**: failed playlists are reported, not fatal
//!
//! # Example
//!
//! ```ignore
//! use hitster_catalog::{validate_locators, CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::with_token("token"))?;
//!
//!     let locators = validate_locators([
//!         "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
//!         "spotify:playlist:37i9dQZF1DX4o1oenSJRJd",
//!     ])
//!     .expect("valid locators");
//!
//!     let batch = client.fetch_multiple_playlists(&locators).await;
//!     for failure in &batch.failures {
//!         eprintln!("{}: {}", failure.locator, failure.error);
//!     }
//!     println!("{} unique tracks", batch.tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod locator;
mod merge;
mod source;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use locator::{resolve_identifier, validate_locators, LocatorIssue};
pub use merge::{merge_tracks, LocatorFailure, PlaylistBatch};
pub use source::PlaylistSource;
pub use types::{
    CatalogAlbum, CatalogArtist, CatalogConfig, CatalogTrack, PlaylistItem, PlaylistResponse,
    PlaylistTracksPage, DEFAULT_API_BASE_URL, DEFAULT_PAGE_LIMIT,
};
