use chrono::{DateTime, Utc};

use crate::{context::Context, error, info, management::TokenManager, utils, warning};

/// Prints both stored records, with the access token redacted.
pub async fn status(ctx: &Context) {
    let now = utils::now();

    let auth = match ctx.store.get_auth().await {
        Ok(auth) => auth,
        Err(e) => error!("Cannot read auth record: {}", e),
    };
    let track = match ctx.store.get_track().await {
        Ok(track) => track,
        Err(e) => error!("Cannot read track record: {}", e),
    };

    info!("Store backend: {}", ctx.store.backend_name());
    info!("Access token: {}", utils::redact(&auth.access_token));
    if TokenManager::is_expired(&auth, now) {
        warning!("Token expired at {}", format_timestamp(auth.expires_at));
    } else {
        info!("Token valid until {}", format_timestamp(auth.expires_at));
    }
    info!("Next poll allowed at {}", format_timestamp(auth.last_request_at));

    if track.title.is_empty() {
        warning!("No track stored yet");
    } else {
        let state = if track.is_playing { "playing" } else { "paused" };
        info!("{} - {} ({})", track.artist, track.title, state);
        info!("Cover: {}", track.cover_url);
        info!("Link: {}", track.external_url);
    }
}

fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
