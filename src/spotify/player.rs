use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::SpotifyClient;
use crate::{
    error::SpotifyError,
    types::{CurrentlyPlayingResponse, RecentlyPlayedResponse, TrackRecord},
    utils,
};

pub const CURRENTLY_PLAYING_PATH: &str = "/me/player/currently-playing";
pub const RECENTLY_PLAYED_PATH: &str = "/me/player/recently-played";

/// What a successful player request told us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A usable, already normalized track.
    Track(TrackRecord),
    /// The endpoint answered but had no track to show.
    NothingPlaying,
}

impl SpotifyClient {
    /// Asks what the account is listening to right now.
    ///
    /// A 204, or a 200 without an `item` (ads, unavailable local files), is
    /// [`PollOutcome::NothingPlaying`]. The returned track carries the
    /// `is_playing` flag Spotify reports, which is false while paused.
    pub async fn poll_current(&self, token: &str) -> Result<PollOutcome, SpotifyError> {
        let endpoint = self.endpoint(CURRENTLY_PLAYING_PATH);
        let res = self.http.get(&endpoint).bearer_auth(token).send().await?;

        match res.status() {
            StatusCode::OK => {
                let body: CurrentlyPlayingResponse = decode(res, &endpoint).await?;
                Ok(match body.item {
                    Some(item) => PollOutcome::Track(utils::normalize_track(&item, body.is_playing)),
                    None => PollOutcome::NothingPlaying,
                })
            }
            StatusCode::NO_CONTENT => Ok(PollOutcome::NothingPlaying),
            status => Err(SpotifyError::Status {
                endpoint,
                status: status.as_u16(),
            }),
        }
    }

    /// Fetches the most recently played track. History is never playing.
    pub async fn poll_recent(&self, token: &str) -> Result<PollOutcome, SpotifyError> {
        let endpoint = self.endpoint(RECENTLY_PLAYED_PATH);
        let res = self
            .http
            .get(&endpoint)
            .query(&[("limit", "1")])
            .bearer_auth(token)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => {
                let body: RecentlyPlayedResponse = decode(res, &endpoint).await?;
                Ok(match body.items.first() {
                    Some(played) => PollOutcome::Track(utils::normalize_track(&played.track, false)),
                    None => PollOutcome::NothingPlaying,
                })
            }
            status => Err(SpotifyError::Status {
                endpoint,
                status: status.as_u16(),
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(res: Response, endpoint: &str) -> Result<T, SpotifyError> {
    let bytes = res.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| SpotifyError::Malformed {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}
