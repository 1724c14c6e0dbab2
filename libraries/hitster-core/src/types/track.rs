/// Track domain type
use super::ids::TrackId;
use super::year::ReleaseYear;
use serde::{Deserialize, Serialize};

/// A playable catalog track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier (the deduplication key)
    pub id: TrackId,

    /// Track title
    pub name: String,

    /// Artist display string, e.g. "Simon & Garfunkel" or "Daft Punk, Pharrell Williams"
    pub artist: String,

    /// Album name
    pub album: String,

    /// Release date exactly as the catalog reported it
    pub release_date: String,

    /// Year derived from `release_date`
    pub year: ReleaseYear,

    /// Playable URI handed to the player
    pub uri: String,

    /// Short preview clip, when the catalog offers one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl Track {
    /// Start building a track with the required id and title
    pub fn builder(id: TrackId, name: impl Into<String>) -> TrackBuilder {
        TrackBuilder {
            track: Track {
                id,
                name: name.into(),
                artist: String::new(),
                album: String::new(),
                release_date: String::new(),
                year: ReleaseYear::Unknown,
                uri: String::new(),
                preview_url: None,
            },
        }
    }

    /// Year as shown to players ("1987" or "unknown")
    pub fn year_label(&self) -> String {
        self.year.to_string()
    }
}

/// Builder for [`Track`]
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    track: Track,
}

impl TrackBuilder {
    /// Set the artist display string
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.track.artist = artist.into();
        self
    }

    /// Join several artist names into the display string
    pub fn artists<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.track.artist = names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self
    }

    /// Set the album name
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.track.album = album.into();
        self
    }

    /// Set the raw release date; the year is derived from it
    pub fn release_date(mut self, release_date: impl Into<String>) -> Self {
        let release_date = release_date.into();
        self.track.year = ReleaseYear::parse(&release_date);
        self.track.release_date = release_date;
        self
    }

    /// Set the playable URI
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.track.uri = uri.into();
        self
    }

    /// Set the preview URL
    pub fn preview_url(mut self, preview_url: Option<String>) -> Self {
        self.track.preview_url = preview_url;
        self
    }

    /// Finish the track
    pub fn build(self) -> Track {
        self.track
    }
}
