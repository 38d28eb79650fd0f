// kv.rs — KeyValueStore trait plus file-backed and in-memory implementations.
//
// The key-value store is the only boundary the rest of the app talks to for
// persistence. Values are opaque UTF-8 JSON text at this layer; typing happens
// one level up in `RecordStore`.
//
// FileKvStore layout: `<store_dir>/<key>.json`, one file per slot. Writes go
// to a dot-prefixed temp sibling first and are renamed into place, so a slot
// is either the old value or the new one, never a torn write. Each write gets
// its own temp name so overlapping writers never share a file.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;

/// Async key-value storage over string keys and UTF-8 JSON values.
///
/// Implementations must make `set` an atomic overwrite of a single slot.
/// No ordering is promised between concurrent writers to the same key:
/// whichever `set` completes last wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot under `key` with `value`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the slot under `key`. Returns false if it was already empty.
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Backend name (for diagnostics).
    fn name(&self) -> &str;
}

/// Check that `key` can name a storage slot.
///
/// Keys are non-empty ASCII made of alphanumerics, `-`, `_` and `.`, and may
/// not start with `.` (that prefix is reserved for temp files on disk).
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// File-per-key store rooted at a directory.
pub struct FileKvStore {
    store_dir: PathBuf,
}

impl FileKvStore {
    /// Create a store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&store_dir).map_err(|source| {
            StorageError::StorageUnavailable {
                key: store_dir.display().to_string(),
                source,
            }
        })?;
        Ok(Self { store_dir })
    }

    fn slot_file(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{}.json", key))
    }

    fn temp_file(&self, key: &str) -> PathBuf {
        self.store_dir
            .join(format!(".{}.json.{}.tmp", key, Uuid::new_v4().simple()))
    }
}

fn unavailable(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::StorageUnavailable {
        key: key.to_string(),
        source,
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match tokio::fs::read_to_string(self.slot_file(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(key)(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let tmp = self.temp_file(key);
        tokio::fs::write(&tmp, value)
            .await
            .map_err(unavailable(key))?;
        if let Err(e) = tokio::fs::rename(&tmp, self.slot_file(key)).await {
            // Leave no stray temp file behind; the original slot is untouched.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(unavailable(key)(e));
        }
        tracing::trace!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        match tokio::fs::remove_file(self.slot_file(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(unavailable(key)(e)),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// In-memory store. Contents vanish with the process.
#[derive(Default)]
pub struct MemoryKvStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        Ok(self.slots.write().await.remove(key).is_some())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
