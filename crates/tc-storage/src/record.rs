// record.rs — Typed single-slot persistence on top of a KeyValueStore.
//
// Each persisted entity type implements `Record` and names its own slot key.
// A `RecordStore<R>` then owns all serialization for that type, so callers
// never build keys or touch JSON text directly.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// An entity type that lives in exactly one key-value slot.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// The slot key. Must pass [`crate::validate_key`].
    const KEY: &'static str;
}

/// Typed accessor for the slot belonging to `R`.
pub struct RecordStore<R: Record> {
    kv: Arc<dyn KeyValueStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            kv: Arc::clone(&self.kv),
            _record: PhantomData,
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            _record: PhantomData,
        }
    }

    /// Load the record, or `None` if the slot is empty.
    ///
    /// A stored JSON `null` also counts as empty. Anything else that fails to
    /// parse is reported as [`StorageError::MalformedRecord`].
    pub async fn load(&self) -> Result<Option<R>, StorageError> {
        let Some(text) = self.kv.get(R::KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<R>>(&text).map_err(|source| {
            StorageError::MalformedRecord {
                key: R::KEY.to_string(),
                source,
            }
        })
    }

    /// Serialize and overwrite the slot.
    pub async fn store(&self, record: &R) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.kv.set(R::KEY, &json).await
    }

    /// Remove the slot. Returns false if nothing was stored.
    pub async fn clear(&self) -> Result<bool, StorageError> {
        self.kv.remove(R::KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Preferences {
        theme: String,
        reminders: bool,
    }

    impl Record for Preferences {
        const KEY: &'static str = "preferences";
    }

    fn store() -> (Arc<MemoryKvStore>, RecordStore<Preferences>) {
        let kv = Arc::new(MemoryKvStore::new());
        let records = RecordStore::new(kv.clone() as Arc<dyn KeyValueStore>);
        (kv, records)
    }

    #[tokio::test]
    async fn load_empty_slot_is_none() {
        let (_, records) = store();
        assert!(records.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_then_load() {
        let (kv, records) = store();
        let prefs = Preferences {
            theme: "dark".into(),
            reminders: true,
        };
        records.store(&prefs).await.unwrap();

        assert_eq!(records.load().await.unwrap(), Some(prefs));
        let raw = kv.get("preferences").await.unwrap().unwrap();
        assert!(raw.contains("\"theme\":\"dark\""));
    }

    #[tokio::test]
    async fn stored_null_is_none() {
        let (kv, records) = store();
        kv.set("preferences", "null").await.unwrap();
        assert!(records.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn garbage_is_malformed_not_absent() {
        let (kv, records) = store();
        kv.set("preferences", "{not json").await.unwrap();

        let err = records.load().await.unwrap_err();
        assert!(matches!(err, StorageError::MalformedRecord { ref key, .. } if key == "preferences"));
    }

    #[tokio::test]
    async fn wrong_shape_is_malformed() {
        let (kv, records) = store();
        kv.set("preferences", "{\"theme\": 3}").await.unwrap();
        assert!(matches!(
            records.load().await,
            Err(StorageError::MalformedRecord { .. })
        ));
    }

    #[tokio::test]
    async fn clear_reports_whether_anything_was_removed() {
        let (_, records) = store();
        assert!(!records.clear().await.unwrap());

        records
            .store(&Preferences {
                theme: "light".into(),
                reminders: false,
            })
            .await
            .unwrap();
        assert!(records.clear().await.unwrap());
        assert!(records.load().await.unwrap().is_none());
    }
}
