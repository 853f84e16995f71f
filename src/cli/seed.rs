use crate::{
    config::Config,
    error,
    store::FileStore,
    success,
    types::{AuthRecord, TrackRecord},
};

/// Creates both records in the configured store directory.
///
/// The auth record starts expired with an empty token so the first
/// invocation performs a refresh, and polling is allowed immediately.
pub async fn seed(config: &Config, force: bool) {
    let store = FileStore::new(config.store_dir.clone());

    let auth = AuthRecord {
        access_token: String::new(),
        expires_at: 0,
        last_request_at: 0,
    };

    if let Err(e) = store.seed(&auth, &TrackRecord::default(), force).await {
        error!("Failed to seed store: {}\nUse --force to overwrite.", e);
    }

    success!("Seeded store at {}", store.dir().display());
}
