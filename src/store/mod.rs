//! Durable storage for the two singleton records.
//!
//! - [`FileStore`]: one JSON document per record on the local disk
//! - [`MemoryStore`]: in-process records for tests and dry runs
//!
//! Every write updates one field set of one record. Reads of a record that
//! was never seeded fail with [`StoreError::MissingRecord`].

mod file;
mod memory;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    types::{AuthRecord, TrackRecord},
};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Typed access to the auth and track records.
///
/// Implementations must be shareable across concurrent invocations; a
/// field update must not drop a concurrent update to another field of the
/// same record.
#[async_trait]
pub trait Store: Send + Sync {
    /// Human-readable backend name (e.g., "file", "memory").
    fn backend_name(&self) -> &str;

    /// Loads the auth record.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingRecord`] when the record was never seeded, or an
    /// I/O or decode error from the backend.
    async fn get_auth(&self) -> Result<AuthRecord, StoreError>;

    /// Loads the track record.
    ///
    /// # Errors
    ///
    /// Same as [`Store::get_auth`].
    async fn get_track(&self) -> Result<TrackRecord, StoreError>;

    /// Writes the token and its expiry together; `last_request_at` is kept.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingRecord`] when there is no auth record to update.
    async fn set_auth(&self, access_token: &str, expires_at: i64) -> Result<(), StoreError>;

    /// Sets the earliest instant the next poll is allowed.
    async fn set_last_poll_time(&self, at: i64) -> Result<(), StoreError>;

    /// Replaces the whole track record.
    async fn set_track(&self, track: &TrackRecord) -> Result<(), StoreError>;

    /// Updates only the playing flag of the track record.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingRecord`] when there is no track record to update.
    async fn set_is_playing(&self, is_playing: bool) -> Result<(), StoreError>;
}
