use serde::{Deserialize, Serialize};

/// Store key of the auth singleton.
pub const AUTH_RECORD_KEY: &str = "prod";

/// Store key of the track singleton.
pub const TRACK_RECORD_KEY: &str = "current_song";

/// Token state plus the poll gate shared by all invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    pub access_token: String,
    pub expires_at: i64,
    pub last_request_at: i64,
}

/// Normalized snapshot of the last known song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub title: String,
    pub artist: String,
    #[serde(rename = "coverURL")]
    pub cover_url: String,
    #[serde(rename = "externalURL")]
    pub external_url: String,
    pub is_playing: bool,
}

impl TrackRecord {
    /// Title and artist form the identity of a track; everything else is decoration.
    pub fn same_song(&self, other: &TrackRecord) -> bool {
        self.title == other.title && self.artist == other.artist
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlayingResponse {
    #[serde(default)]
    pub is_playing: bool,
    pub item: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedResponse {
    #[serde(default)]
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistoryItem {
    pub track: SpotifyTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    pub album: Option<SpotifyAlbum>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Body of every invocation response. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub song_title: String,
    pub artist_name: String,
    #[serde(rename = "coverURL")]
    pub cover_url: String,
    #[serde(rename = "externalURL")]
    pub external_url: String,
    pub is_playing: bool,
    pub is_cached: bool,
}

/// What a serverless host expects back from the function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
}
