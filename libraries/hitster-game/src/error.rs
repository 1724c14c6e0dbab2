//! Error types for game sessions

use hitster_catalog::LocatorFailure;
use thiserror::Error;

/// Game session errors
#[derive(Debug, Error)]
pub enum GameError {
    /// Load produced an empty pool: every locator failed or every playlist was empty
    #[error("No tracks found in the provided playlists")]
    NoTracksFound {
        /// Per-locator failures behind the empty result
        failures: Vec<LocatorFailure>,
    },
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
