//! Configuration management for spotnp.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory. Serverless hosts inject variables
//! directly, so the file is optional:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Defaults for everything except the three Spotify secrets
//!
//! [`Config::from_env`] is called once at process start and the result is
//! carried in the invocation [`Context`](crate::context::Context).

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::ConfigError;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from `spotnp/.env` in the local data directory.
///
/// Creates the directory if needed so users know where to drop the file.
/// Variables already present in the environment are never overridden.
///
/// - Linux: `~/.local/share/spotnp/.env`
/// - macOS: `~/Library/Application Support/spotnp/.env`
/// - Windows: `%LOCALAPPDATA%/spotnp/.env`
///
/// # Errors
///
/// Fails if the directory cannot be created or an existing `.env` file
/// cannot be parsed. A missing file is fine.
pub async fn load_env() -> Result<(), ConfigError> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }
    Ok(())
}

/// Root of everything spotnp keeps on the local disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotnp");
    path
}

/// Credentials for the refresh-token grant.
#[derive(Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: SpotifyCredentials,
    pub token_url: String,
    pub api_url: String,
    pub store_dir: PathBuf,
    pub allow_origin: String,
    pub server_address: SocketAddr,
}

impl Config {
    /// Builds the configuration from the current process environment.
    ///
    /// # Errors
    ///
    /// `client_id`, `client_secret` and `refresh_token` are required; a
    /// missing one yields [`ConfigError::Missing`]. An unparsable
    /// `SPOTNP_SERVER_ADDRESS` yields [`ConfigError::Invalid`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let credentials = SpotifyCredentials {
            client_id: required("client_id")?,
            client_secret: required("client_secret")?,
            refresh_token: required("refresh_token")?,
        };

        let server_address = lookup("SPOTNP_SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_address =
            SocketAddr::from_str(&server_address).map_err(|e| ConfigError::Invalid {
                name: "SPOTNP_SERVER_ADDRESS",
                message: e.to_string(),
            })?;

        Ok(Self {
            credentials,
            token_url: lookup("SPOTNP_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: lookup("SPOTNP_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            store_dir: lookup("SPOTNP_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir().join("store")),
            allow_origin: lookup("SPOTNP_ALLOW_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOW_ORIGIN.to_string()),
            server_address,
        })
    }
}
