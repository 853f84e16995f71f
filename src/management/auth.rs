use crate::{spotify::SpotifyClient, store::Store, success, types::AuthRecord, warning};

/// Lifetime given to a freshly refreshed token, five minutes short of
/// Spotify's one hour.
pub const TOKEN_LIFETIME_SECS: i64 = 3300;

/// Keeps the stored access token usable.
pub struct TokenManager<'a> {
    store: &'a dyn Store,
    spotify: &'a SpotifyClient,
}

impl<'a> TokenManager<'a> {
    pub fn new(store: &'a dyn Store, spotify: &'a SpotifyClient) -> Self {
        TokenManager { store, spotify }
    }

    /// Returns a token to poll with, refreshing it first when expired.
    ///
    /// A failed refresh is logged and the stored token is returned as is;
    /// polling with it fails softly later on.
    pub async fn get_valid_token(&self, auth: &AuthRecord, now: i64) -> String {
        if !Self::is_expired(auth, now) {
            return auth.access_token.clone();
        }

        match self.spotify.refresh_access_token().await {
            Ok(token) => {
                let expires_at = now + TOKEN_LIFETIME_SECS;
                if let Err(e) = self.store.set_auth(&token, expires_at).await {
                    warning!("Refreshed token could not be stored: {}", e);
                } else {
                    success!("Access token refreshed, valid until {}", expires_at);
                }
                token
            }
            Err(e) => {
                warning!("Token refresh failed, keeping the stored token: {}", e);
                auth.access_token.clone()
            }
        }
    }

    /// A token expiring exactly at `now` already counts as expired.
    pub fn is_expired(auth: &AuthRecord, now: i64) -> bool {
        auth.expires_at <= now
    }
}
