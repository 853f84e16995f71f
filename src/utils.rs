use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use crate::types::{SpotifyImage, SpotifyTrack, TrackRecord};

/// Matches "(feat. X)", "(feat X)", "(featuring X)" and "(with X)" in any
/// case, together with the whitespace in front of it. "feat" and "with" must
/// be whole words so "(Feathers Remix)" or "(Withered Mix)" survive.
static FEATURE_ANNOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(\s*(?:feat(?:\.|uring\b|\b)|with\b)[^)]*\)")
        .expect("feature annotation regex is valid")
});

/// Current unix time in seconds.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Strips feature annotations from a track title and trims the result.
pub fn clean_title(title: &str) -> String {
    FEATURE_ANNOTATION_REGEX
        .replace_all(title, "")
        .trim()
        .to_string()
}

/// Joins artist names with ", " in the order Spotify lists them.
pub fn build_artist_name<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .collect::<Vec<_>>()
        .join(", ")
        .trim()
        .to_string()
}

/// Picks the medium cover (index 1). Spotify orders images largest first;
/// short lists fall back to the first image.
pub fn pick_cover_url(images: &[SpotifyImage]) -> String {
    images
        .get(1)
        .or_else(|| images.first())
        .map(|image| image.url.clone())
        .unwrap_or_default()
}

/// Converts a Spotify track object into the stored track shape.
pub fn normalize_track(track: &SpotifyTrack, is_playing: bool) -> TrackRecord {
    let names: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();

    TrackRecord {
        title: clean_title(&track.name),
        artist: build_artist_name(&names),
        cover_url: track
            .album
            .as_ref()
            .map(|album| pick_cover_url(&album.images))
            .unwrap_or_default(),
        external_url: track.external_urls.spotify.clone().unwrap_or_default(),
        is_playing,
    }
}

/// Hides all but the last four characters of a secret.
pub fn redact(secret: &str) -> String {
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{visible}")
    }
}
