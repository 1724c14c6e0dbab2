mod ids;
mod playlist;
mod track;
mod year;

pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::{Track, TrackBuilder};
pub use year::ReleaseYear;
