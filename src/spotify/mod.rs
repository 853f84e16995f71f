//! # Spotify Integration Module
//!
//! Thin client for the three Spotify endpoints spotnp needs:
//!
//! ```text
//! Management Layer (TokenManager, PlaybackCoordinator)
//!          ↓
//! SpotifyClient
//!     ├── auth    refresh-token grant against the accounts service
//!     └── player  currently-playing / recently-played
//!          ↓
//! reqwest
//! ```
//!
//! Every call returns a [`SpotifyError`] on failure. Nothing here decides
//! whether a failure matters; the management layer logs and absorbs them.
//! No call is retried.

pub mod auth;
pub mod player;

use reqwest::Client;

use crate::config::{Config, SpotifyCredentials};

pub use player::PollOutcome;

/// Shared HTTP client plus the endpoints and credentials it talks to.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    credentials: SpotifyCredentials,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Builds the client from the configured endpoints and credentials.
    ///
    /// No request is made here; bad credentials only surface on the first
    /// refresh.
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            credentials: config.credentials.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url)
    }
}
