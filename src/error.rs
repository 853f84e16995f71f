//! Error types shared across the crate.
//!
//! Errors are split by how the invocation treats them: [`SpotifyError`] is
//! always transient and gets absorbed, [`StoreError`] is fatal on reads and
//! absorbed on writes, and [`InvocationError`] is the only thing an
//! invocation ever hands back to its host.

use thiserror::Error;

/// Failures talking to the Spotify Web API or the accounts service.
#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },
}

/// Failures reading or writing the durable record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record '{0}' does not exist, run `spotnp seed` first")]
    MissingRecord(&'static str),

    #[error("record '{0}' already exists")]
    AlreadySeeded(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Startup configuration problems; all of them are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("invalid value for '{name}': {message}")]
    Invalid { name: &'static str, message: String },

    #[error("cannot load .env file: {0}")]
    EnvFile(String),
}

/// Failures an invocation hands back to its host.
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("store read failed: {0}")]
    Store(#[from] StoreError),

    #[error("cannot encode response body: {0}")]
    Encode(#[from] serde_json::Error),
}
