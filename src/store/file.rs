use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use super::Store;
use crate::{
    error::StoreError,
    types::{AUTH_RECORD_KEY, AuthRecord, TRACK_RECORD_KEY, TrackRecord},
};

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Stores each record as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// concurrent reader sees either the old or the new document. Every write
/// holds `write_lock` from read to rename, so field updates from concurrent
/// invocations in this process never overwrite each other. Clones share the
/// lock. Separate processes on the same directory are not coordinated.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Creates a store rooted at `dir`. Nothing touches the disk until the
    /// first read or write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Directory holding the record documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes both records, used once to bootstrap a fresh store.
    ///
    /// Existing records are kept unless `force` is set.
    pub async fn seed(
        &self,
        auth: &AuthRecord,
        track: &TrackRecord,
        force: bool,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        if !force {
            for key in [AUTH_RECORD_KEY, TRACK_RECORD_KEY] {
                if self.path(key).is_file() {
                    return Err(StoreError::AlreadySeeded(key));
                }
            }
        }

        self.write(AUTH_RECORD_KEY, auth).await?;
        self.write(TRACK_RECORD_KEY, track).await
    }

    async fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, StoreError> {
        let content = match async_fs::read_to_string(self.path(key)).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::MissingRecord(key));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn write<T: Serialize>(&self, key: &'static str, record: &T) -> Result<(), StoreError> {
        async_fs::create_dir_all(&self.dir).await?;

        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.dir.join(format!(
            ".{key}.{pid}.{seq}.tmp",
            pid = std::process::id(),
            seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        async_fs::write(&tmp, json).await?;
        async_fs::rename(&tmp, self.path(key)).await?;
        Ok(())
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Store for FileStore {
    fn backend_name(&self) -> &str {
        "file"
    }

    async fn get_auth(&self) -> Result<AuthRecord, StoreError> {
        self.read(AUTH_RECORD_KEY).await
    }

    async fn get_track(&self) -> Result<TrackRecord, StoreError> {
        self.read(TRACK_RECORD_KEY).await
    }

    async fn set_auth(&self, access_token: &str, expires_at: i64) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut auth = self.get_auth().await?;
        auth.access_token = access_token.to_string();
        auth.expires_at = expires_at;
        self.write(AUTH_RECORD_KEY, &auth).await
    }

    async fn set_last_poll_time(&self, at: i64) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut auth = self.get_auth().await?;
        auth.last_request_at = at;
        self.write(AUTH_RECORD_KEY, &auth).await
    }

    async fn set_track(&self, track: &TrackRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(TRACK_RECORD_KEY, track).await
    }

    async fn set_is_playing(&self, is_playing: bool) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut track = self.get_track().await?;
        track.is_playing = is_playing;
        self.write(TRACK_RECORD_KEY, &track).await
    }
}
