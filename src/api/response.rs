use crate::types::{InvocationResponse, NowPlaying, ResponseHeaders, TrackRecord};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Shapes a track into the public response. Same input, same bytes.
pub fn build_response(
    track: &TrackRecord,
    is_cached: bool,
    allow_origin: &str,
) -> Result<InvocationResponse, serde_json::Error> {
    let body = NowPlaying {
        song_title: track.title.clone(),
        artist_name: track.artist.clone(),
        cover_url: track.cover_url.clone(),
        external_url: track.external_url.clone(),
        is_playing: track.is_playing,
        is_cached,
    };

    Ok(InvocationResponse {
        status_code: 200,
        headers: ResponseHeaders {
            allow_origin: allow_origin.to_string(),
            content_type: CONTENT_TYPE_JSON.to_string(),
        },
        body: serde_json::to_string(&body)?,
    })
}
