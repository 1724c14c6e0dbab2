//! Text rendering for tracks, stats and load results

use hitster_catalog::{LocatorFailure, LocatorIssue};
use hitster_core::Track;
use hitster_game::{GameStats, LoadSummary};

/// Line shown while a track is playing; details stay hidden until revealed
pub fn playing_line(track: &Track) -> String {
    format!("Now playing: {}", track.uri)
}

/// Card shown after a reveal
pub fn reveal_card(track: &Track) -> String {
    let mut card = format!(
        "{}\n{}\n{}",
        track.year_label(),
        track.name,
        track.artist
    );
    if !track.album.is_empty() {
        card.push_str(&format!("\n{}", track.album));
    }
    card
}

/// One-line stats summary
pub fn stats_line(stats: &GameStats) -> String {
    format!(
        "{} / {} tracks played, {} remaining, from {} playlist{}",
        stats.used_tracks,
        stats.total_tracks,
        stats.remaining_tracks,
        stats.playlist_count,
        if stats.playlist_count == 1 { "" } else { "s" }
    )
}

/// Result of a load, including skipped locators
pub fn load_report(summary: &LoadSummary) -> String {
    let mut report = format!(
        "Loaded {} unique tracks from {} playlist{}",
        summary.track_count,
        summary.playlist_count,
        if summary.playlist_count == 1 { "" } else { "s" }
    );
    for failure in &summary.failures {
        report.push('\n');
        report.push_str(&failure_line(failure));
    }
    report
}

pub fn failure_line(failure: &LocatorFailure) -> String {
    format!("  skipped {}: {}", failure.locator, failure.error)
}

pub fn locator_issues(issues: &[LocatorIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
