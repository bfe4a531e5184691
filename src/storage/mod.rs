//! Key-value persistence for game backups, boards, and configuration.
//!
//! Payloads are JSON with stable string keys for enums, so persisted data
//! survives variant reordering. Missing or malformed payloads always fall
//! back to defaults; corruption never crashes the app or leaves partial
//! state behind.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// The three persisted payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    GameBackup,
    HighScores,
    Configuration,
}

impl StorageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::GameBackup => "game-backup",
            StorageKey::HighScores => "high-scores",
            StorageKey::Configuration => "configuration",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store for string payloads. `read` returns `Ok(None)` when
/// the key has never been written.
pub trait Storage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError>;
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}

/// Load and decode a persisted value. Missing, unreadable, and malformed
/// payloads all come back as `None`; the caller substitutes a default.
pub fn load<T: DeserializeOwned>(storage: &impl Storage, key: StorageKey) -> Option<T> {
    let payload = match storage.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "failed to read payload");
            return None;
        }
    };
    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "discarding malformed payload");
            None
        }
    }
}

/// Encode and persist a value.
pub fn store<T: Serialize>(
    storage: &impl Storage,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(value)?;
    storage.write(key, &payload)
}
