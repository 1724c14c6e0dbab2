//! Digital Hitster - Game Session Engine
//!
//! Platform-agnostic game state for Digital Hitster.
//!
//! This crate provides:
//! - Loading one or more playlists into a deduplicated pool
//! - Drawing unused tracks uniformly at random
//! - Reveal / mark-used / reset / unload transitions
//! - Statistics and an event queue for front-ends
//!
//! # Architecture
//!
//! `hitster-game` never talks to the network itself: playlists come from
//! any [`PlaylistSource`](hitster_catalog::PlaylistSource), normally a
//! [`CatalogClient`](hitster_catalog::CatalogClient). Audio playback is the
//! front-end's job; it plays `current_track().uri` however it likes.
//!
//! State is an immutable [`GameState`] value replaced on every transition.
//!
//! # Example
//!
//! ```rust,ignore
//! use hitster_catalog::{CatalogClient, CatalogConfig};
//! use hitster_game::{GameSession, RandomPicker};
//!
//! let client = CatalogClient::new(CatalogConfig::with_token(token))?;
//! let mut session = GameSession::with_picker(client, RandomPicker::seeded(7));
//!
//! let summary = session.load(&["37i9dQZF1DXcBWIGoYBM5M".to_string()]).await?;
//! println!("{} tracks", summary.track_count);
//!
//! while let Some(track) = session.draw_random_track() {
//!     // front-end starts playback of track.uri, players guess...
//!     session.reveal_current_track();
//!     println!("{} - {} ({})", track.artist, track.name, track.year_label());
//!     session.mark_current_track_used();
//! }
//!
//! let stats = session.stats();
//! assert_eq!(stats.remaining_tracks, 0);
//! ```

mod error;
mod events;
mod picker;
mod pool;
mod session;
mod state;

// Public exports
pub use error::{GameError, Result};
pub use events::GameEvent;
pub use picker::{RandomPicker, ScriptedPicker, TrackPicker};
pub use pool::TrackPool;
pub use session::{GameSession, LoadSummary, NO_TRACKS_REMAINING};
pub use state::{GamePhase, GameState, GameStats};
