use crate::{
    info,
    spotify::{PollOutcome, SpotifyClient},
    store::Store,
    types::{AuthRecord, TrackRecord},
    warning,
};

/// Minimum gap between two polls of the player endpoints.
pub const POLL_INTERVAL_SECS: i64 = 5;

/// Result of one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Track state to show after this poll.
    pub track: TrackRecord,
    /// Whether Spotify gave a definite answer about the playback state.
    pub fresh: bool,
    /// Whether the stored track record was replaced.
    pub changed: bool,
}

/// Decides when to poll Spotify and what to write back afterwards.
pub struct PlaybackCoordinator<'a> {
    store: &'a dyn Store,
    spotify: &'a SpotifyClient,
}

impl<'a> PlaybackCoordinator<'a> {
    pub fn new(store: &'a dyn Store, spotify: &'a SpotifyClient) -> Self {
        Self { store, spotify }
    }

    /// Polling is allowed once `last_request_at` lies in the past.
    pub fn should_poll(auth: &AuthRecord, now: i64) -> bool {
        auth.last_request_at < now
    }

    /// Merges a freshly polled track into the cached one.
    ///
    /// Title and artist are the identity: when either differs the polled
    /// track wins entirely and `changed` is true. Otherwise the cached record
    /// is kept and only its playing flag follows the poll.
    pub fn apply_poll_result(cached: &TrackRecord, polled: &TrackRecord) -> (TrackRecord, bool) {
        if cached.same_song(polled) {
            let mut track = cached.clone();
            track.is_playing = polled.is_playing;
            (track, false)
        } else {
            (polled.clone(), true)
        }
    }

    /// Runs one poll cycle and persists its outcome.
    ///
    /// currently-playing is asked first; when nothing is playing the playing
    /// flag is cleared and recently-played fills in the last track. Upstream
    /// and store write errors are logged, never returned. The next poll is
    /// pushed to `now + POLL_INTERVAL_SECS` whatever happened.
    pub async fn poll(&self, token: &str, cached: &TrackRecord, now: i64) -> PollReport {
        let mut report = PollReport {
            track: cached.clone(),
            fresh: false,
            changed: false,
        };

        match self.spotify.poll_current(token).await {
            Ok(PollOutcome::Track(polled)) => {
                report.fresh = true;
                self.record(&mut report, cached, &polled).await;
            }
            Ok(PollOutcome::NothingPlaying) => {
                report.fresh = true;
                let mut stopped = cached.clone();
                stopped.is_playing = false;
                report.track = stopped.clone();

                // A recent track is always stored with is_playing=false, so
                // record() persists the flag; otherwise clear it here.
                match self.spotify.poll_recent(token).await {
                    Ok(PollOutcome::Track(polled)) => {
                        self.record(&mut report, &stopped, &polled).await;
                    }
                    outcome => {
                        match outcome {
                            Err(e) => warning!("Recently played lookup failed: {}", e),
                            _ => info!("Listening history is empty"),
                        }
                        if let Err(e) = self.store.set_is_playing(false).await {
                            warning!("Failed to clear playing flag: {}", e);
                        }
                    }
                }
            }
            Err(e) => warning!("Currently playing lookup failed: {}", e),
        }

        if let Err(e) = self.store.set_last_poll_time(now + POLL_INTERVAL_SECS).await {
            warning!("Failed to record poll time: {}", e);
        }

        report
    }

    async fn record(&self, report: &mut PollReport, cached: &TrackRecord, polled: &TrackRecord) {
        let (track, changed) = Self::apply_poll_result(cached, polled);

        let written = if changed {
            info!("Now showing '{}' by {}", track.title, track.artist);
            self.store.set_track(&track).await
        } else {
            self.store.set_is_playing(track.is_playing).await
        };
        if let Err(e) = written {
            warning!("Failed to store track state: {}", e);
        }

        report.track = track;
        report.changed = changed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, artist: &str, cover: &str, is_playing: bool) -> TrackRecord {
        TrackRecord {
            title: title.to_string(),
            artist: artist.to_string(),
            cover_url: cover.to_string(),
            external_url: format!("https://open.spotify.com/track/{title}"),
            is_playing,
        }
    }

    #[test]
    fn test_should_poll_only_after_gate() {
        let auth = AuthRecord {
            access_token: "t".to_string(),
            expires_at: 0,
            last_request_at: 100,
        };

        assert!(!PlaybackCoordinator::should_poll(&auth, 99));
        assert!(!PlaybackCoordinator::should_poll(&auth, 100));
        assert!(PlaybackCoordinator::should_poll(&auth, 101));
    }

    #[test]
    fn test_same_song_keeps_cached_decoration() {
        let cached = track("Song", "Band", "https://i/old.jpg", false);
        let polled = track("Song", "Band", "https://i/new.jpg", true);

        let (result, changed) = PlaybackCoordinator::apply_poll_result(&cached, &polled);

        assert!(!changed);
        assert_eq!(result.cover_url, "https://i/old.jpg");
        assert!(result.is_playing);
    }

    #[test]
    fn test_artist_change_overwrites() {
        let cached = track("Song", "Band", "https://i/old.jpg", true);
        let polled = track("Song", "Band, Guest", "https://i/new.jpg", true);

        let (result, changed) = PlaybackCoordinator::apply_poll_result(&cached, &polled);

        assert!(changed);
        assert_eq!(result, polled);
    }

    #[test]
    fn test_title_change_overwrites() {
        let cached = track("Song", "Band", "https://i/a.jpg", false);
        let polled = track("Other Song", "Band", "https://i/b.jpg", true);

        let (result, changed) = PlaybackCoordinator::apply_poll_result(&cached, &polled);

        assert!(changed);
        assert_eq!(result.title, "Other Song");
        assert_eq!(result.cover_url, "https://i/b.jpg");
    }
}
