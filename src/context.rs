use std::sync::Arc;

use crate::{
    config::Config,
    spotify::SpotifyClient,
    store::{FileStore, Store},
};

/// Everything an invocation needs, built once at process start.
///
/// Shared read-only between concurrent invocations; the store is the only
/// place state changes.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub spotify: SpotifyClient,
}

impl Context {
    /// Context over any store backend. The Spotify client is built from
    /// `config`.
    pub fn new(config: Config, store: Arc<dyn Store>) -> Self {
        let spotify = SpotifyClient::new(&config);
        Self {
            config,
            store,
            spotify,
        }
    }

    /// Context backed by the on-disk store in `config.store_dir`.
    pub fn with_file_store(config: Config) -> Self {
        let store = Arc::new(FileStore::new(config.store_dir.clone()));
        Self::new(config, store)
    }
}
