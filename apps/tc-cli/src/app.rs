// app.rs — Service wiring chosen once at start-up.
//
// Every command gets the same storage backend, goals store and auth provider,
// all built from configuration here. Nothing downstream picks its own.

use std::sync::Arc;

use tc_auth::{provider_for, AuthProvider};
use tc_goals::GoalsStore;
use tc_storage::{FileKvStore, KeyValueStore, MemoryKvStore};

use crate::config::{CompanionConfig, StorageBackend};

pub struct App {
    pub goals: GoalsStore,
    pub auth: Arc<dyn AuthProvider>,
}

impl App {
    pub fn open(config: &CompanionConfig) -> anyhow::Result<Self> {
        let kv: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => Arc::new(FileKvStore::new(config.store_dir())?),
            StorageBackend::Memory => Arc::new(MemoryKvStore::new()),
        };
        tracing::debug!(backend = kv.name(), auth = %config.auth.mode, "services ready");

        Ok(Self {
            goals: GoalsStore::new(Arc::clone(&kv)),
            auth: provider_for(config.auth.mode, kv),
        })
    }
}
