//! Playlist locator resolution.
//!
//! A locator is whatever the player pasted: a bare id, a
//! `spotify:playlist:<id>` URI or an `open.spotify.com/playlist/<id>` link.

use hitster_core::PlaylistId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static BARE_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static URI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"spotify:playlist:([a-zA-Z0-9]+)").unwrap());

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"open\.spotify\.com/playlist/([a-zA-Z0-9]+)").unwrap());

/// Resolve a locator to its bare playlist id.
///
/// URI and URL forms match anywhere in the input, so share links with a
/// query string (`...?si=abc`) still resolve. Returns `None` for anything else.
pub fn resolve_identifier(locator: &str) -> Option<PlaylistId> {
    let locator = locator.trim();

    if BARE_ID_REGEX.is_match(locator) {
        return Some(PlaylistId::new(locator));
    }

    [&*URI_REGEX, &*URL_REGEX]
        .iter()
        .find_map(|pattern| pattern.captures(locator))
        .and_then(|caps| caps.get(1))
        .map(|m| PlaylistId::new(m.as_str()))
}

/// Problem found while validating a list of locators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorIssue {
    /// Entry at `position` (1-based, among non-blank entries) does not resolve
    Invalid { position: usize, locator: String },
    /// Nothing but blank entries were supplied
    NoPlaylists,
}

impl fmt::Display for LocatorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { position, .. } => {
                write!(f, "Playlist {}: Invalid playlist URL or ID", position)
            }
            Self::NoPlaylists => f.write_str("Please add at least one playlist"),
        }
    }
}

/// Clean up user input before a load.
///
/// Blank entries are dropped and the rest trimmed. Every entry that does not
/// resolve is reported; an input with no usable entry fails with
/// [`LocatorIssue::NoPlaylists`].
pub fn validate_locators<I, S>(inputs: I) -> Result<Vec<String>, Vec<LocatorIssue>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let locators: Vec<String> = inputs
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut issues: Vec<LocatorIssue> = locators
        .iter()
        .enumerate()
        .filter(|(_, locator)| resolve_identifier(locator).is_none())
        .map(|(i, locator)| LocatorIssue::Invalid {
            position: i + 1,
            locator: locator.clone(),
        })
        .collect();

    if locators.is_empty() {
        issues.push(LocatorIssue::NoPlaylists);
    }

    if issues.is_empty() {
        Ok(locators)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

    fn resolved(locator: &str) -> Option<String> {
        resolve_identifier(locator).map(|id| id.as_str().to_string())
    }

    #[test]
    fn bare_id_resolves_to_itself() {
        assert_eq!(resolved(ID).as_deref(), Some(ID));
    }

    #[test]
    fn uri_resolves() {
        assert_eq!(resolved("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").as_deref(), Some(ID));
    }

    #[test]
    fn url_resolves() {
        assert_eq!(
            resolved("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn share_link_with_query_resolves() {
        assert_eq!(
            resolved("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=1a2b3c").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn malformed_locators_do_not_resolve() {
        assert!(resolved("not a url").is_none());
        assert!(resolved("").is_none());
        assert!(resolved("https://open.spotify.com/album/37i9dQZF1DXcBWIGoYBM5M").is_none());
        assert!(resolved("spotify:track:37i9dQZF1DXcBWIGoYBM5M").is_none());
        assert!(resolved("https://example.com/playlist/abc").is_none());
    }

    #[test]
    fn validate_drops_blanks_and_trims() {
        let result = validate_locators(["  ", ID, "", " spotify:playlist:abc "]).unwrap();
        assert_eq!(result, vec![ID.to_string(), "spotify:playlist:abc".to_string()]);
    }

    #[test]
    fn validate_reports_positions() {
        let issues = validate_locators([ID, "nope nope", "", "also bad!"]).unwrap_err();
        assert_eq!(
            issues,
            vec![
                LocatorIssue::Invalid { position: 2, locator: "nope nope".into() },
                LocatorIssue::Invalid { position: 3, locator: "also bad!".into() },
            ]
        );
        assert_eq!(issues[0].to_string(), "Playlist 2: Invalid playlist URL or ID");
    }

    #[test]
    fn validate_requires_one_playlist() {
        let issues = validate_locators(["", "   "]).unwrap_err();
        assert_eq!(issues, vec![LocatorIssue::NoPlaylists]);
        assert_eq!(issues[0].to_string(), "Please add at least one playlist");
    }
}
