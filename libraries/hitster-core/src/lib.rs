//! Digital Hitster Core
//!
//! Platform-agnostic domain types for the Digital Hitster game.
//!
//! This crate provides the building blocks shared by the catalog client,
//! the session engine and any front-end driving them.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Identifiers**: `TrackId`, `PlaylistId`
//! - **Domain Types**: `Track`, `Playlist`
//! - **Release years**: `ReleaseYear`, tolerant of unparseable catalog dates
//!
//! # Example
//!
//! ```rust
//! use hitster_core::{Playlist, PlaylistId, ReleaseYear, Track, TrackId};
//!
//! let track = Track::builder(TrackId::new("4uLU6hMCjMI75M1A2tKUQC"), "Never Gonna Give You Up")
//!     .artist("Rick Astley")
//!     .album("Whenever You Need Somebody")
//!     .release_date("1987-11-12")
//!     .uri("spotify:track:4uLU6hMCjMI75M1A2tKUQC")
//!     .build();
//!
//! assert_eq!(track.year, ReleaseYear::Known(1987));
//!
//! let playlist = Playlist::new(PlaylistId::new("37i9dQZF1DXcBWIGoYBM5M"), "Hits", "37i9dQZF1DXcBWIGoYBM5M")
//!     .with_tracks(vec![track]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{Playlist, PlaylistId, ReleaseYear, Track, TrackBuilder, TrackId};
