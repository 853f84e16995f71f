use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Store;
use crate::{
    error::StoreError,
    types::{AUTH_RECORD_KEY, AuthRecord, TRACK_RECORD_KEY, TrackRecord},
};

#[derive(Debug, Default)]
struct Records {
    auth: Option<AuthRecord>,
    track: Option<TrackRecord>,
}

/// Keeps both records in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
}

impl MemoryStore {
    /// An empty store; reads fail until records are inserted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding both records, ready for invocations.
    pub fn seeded(auth: AuthRecord, track: TrackRecord) -> Self {
        Self {
            records: Mutex::new(Records {
                auth: Some(auth),
                track: Some(track),
            }),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &str {
        "memory"
    }

    async fn get_auth(&self) -> Result<AuthRecord, StoreError> {
        self.records
            .lock()
            .await
            .auth
            .clone()
            .ok_or(StoreError::MissingRecord(AUTH_RECORD_KEY))
    }

    async fn get_track(&self) -> Result<TrackRecord, StoreError> {
        self.records
            .lock()
            .await
            .track
            .clone()
            .ok_or(StoreError::MissingRecord(TRACK_RECORD_KEY))
    }

    async fn set_auth(&self, access_token: &str, expires_at: i64) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        let auth = records
            .auth
            .as_mut()
            .ok_or(StoreError::MissingRecord(AUTH_RECORD_KEY))?;
        auth.access_token = access_token.to_string();
        auth.expires_at = expires_at;
        Ok(())
    }

    async fn set_last_poll_time(&self, at: i64) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        let auth = records
            .auth
            .as_mut()
            .ok_or(StoreError::MissingRecord(AUTH_RECORD_KEY))?;
        auth.last_request_at = at;
        Ok(())
    }

    async fn set_track(&self, track: &TrackRecord) -> Result<(), StoreError> {
        self.records.lock().await.track = Some(track.clone());
        Ok(())
    }

    async fn set_is_playing(&self, is_playing: bool) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        let track = records
            .track
            .as_mut()
            .ok_or(StoreError::MissingRecord(TRACK_RECORD_KEY))?;
        track.is_playing = is_playing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_reads_fail() {
        let store = MemoryStore::empty();

        assert!(matches!(
            store.get_auth().await,
            Err(StoreError::MissingRecord("prod"))
        ));
        assert!(matches!(
            store.get_track().await,
            Err(StoreError::MissingRecord("current_song"))
        ));
    }

    #[tokio::test]
    async fn test_field_updates_leave_other_fields_alone() {
        let store = MemoryStore::seeded(
            AuthRecord {
                access_token: "old".to_string(),
                expires_at: 10,
                last_request_at: 20,
            },
            TrackRecord {
                title: "Song".to_string(),
                artist: "Band".to_string(),
                is_playing: true,
                ..Default::default()
            },
        );

        store.set_auth("new", 99).await.unwrap();
        store.set_is_playing(false).await.unwrap();

        let auth = store.get_auth().await.unwrap();
        assert_eq!(auth.access_token, "new");
        assert_eq!(auth.expires_at, 99);
        assert_eq!(auth.last_request_at, 20);

        let track = store.get_track().await.unwrap();
        assert_eq!(track.title, "Song");
        assert!(!track.is_playing);
    }
}
