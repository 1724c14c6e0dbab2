/// Release year derived from a catalog release date
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar year a track was released in.
///
/// Catalog release dates come with day, month or year precision
/// (`1987-11-12`, `1987-11`, `1987`). Anything else is kept as `Unknown`
/// rather than rejected, so a single malformed date never drops a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum ReleaseYear {
    /// Year parsed from the release date
    Known(i32),
    /// Release date missing or unparseable
    Unknown,
}

impl ReleaseYear {
    /// Parse the year out of a `YYYY[-MM[-DD]]` release date.
    ///
    /// Year zero is the catalog's placeholder for "no date" and is unknown.
    pub fn parse(release_date: &str) -> Self {
        let trimmed = release_date.trim();
        let parts: Vec<&str> = trimmed.split('-').collect();

        // %Y accepts any width, so the year component is checked up front
        let four_digit_year = parts
            .first()
            .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
        if !four_digit_year {
            return Self::Unknown;
        }

        let date = match parts.as_slice() {
            [year] => return year.parse::<i32>().ok().into(),
            [year, month] => {
                NaiveDate::parse_from_str(&format!("{}-{}-01", year, month), "%Y-%m-%d").ok()
            }
            [_, _, _] => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok(),
            _ => None,
        };

        date.map(|d| d.year()).into()
    }

    /// The year, if known
    pub fn value(self) -> Option<i32> {
        match self {
            Self::Known(year) => Some(year),
            Self::Unknown => None,
        }
    }

    /// Check whether the year could be derived
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(year) => write!(f, "{}", year),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<Option<i32>> for ReleaseYear {
    fn from(value: Option<i32>) -> Self {
        value.filter(|year| *year > 0).map_or(Self::Unknown, Self::Known)
    }
}

impl From<ReleaseYear> for Option<i32> {
    fn from(year: ReleaseYear) -> Self {
        year.value()
    }
}
