// store.rs — GoalsStore: persistence for the user's therapy goals.
//
// One record, one slot. `save` and `update` both replace the whole record;
// the only thing carried over from the previous record is `createdDate`.
//
// Concurrent saves are not serialized here. Two overlapping saves both read
// the old record and both write; whichever write lands last wins. Callers
// are UI handlers driven at interaction speed, so this race is accepted
// rather than guarded.

use std::sync::Arc;

use tc_storage::{KeyValueStore, RecordStore, StorageError};

use crate::clock::{Clock, SystemClock};
use crate::summary::GoalsSummary;

/// Durable single-record store for therapy goals.
#[derive(Clone)]
pub struct GoalsStore {
    records: RecordStore<GoalsSummary>,
    clock: Arc<dyn Clock>,
}

impl GoalsStore {
    /// Create a store over the given key-value backend, using wall-clock time.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            records: RecordStore::new(kv),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Save the user's goals, replacing any previous record.
    ///
    /// Keeps the existing `created_date` if a record is already stored;
    /// otherwise stamps it now. `last_updated` is always stamped now. A stored
    /// record that fails to parse is reported, not overwritten.
    pub async fn save(
        &self,
        focus_areas: Vec<String>,
        desired_changes: Vec<String>,
    ) -> Result<GoalsSummary, StorageError> {
        let existing = self.records.load().await?;
        let now = self.clock.now();

        let first_save = existing.is_none();
        let created_date = existing.map(|s| s.created_date).unwrap_or(now);
        let summary = GoalsSummary {
            focus_areas,
            desired_changes,
            created_date,
            // The clock may step backwards between saves.
            last_updated: now.max(created_date),
        };

        self.records.store(&summary).await?;
        tracing::debug!(
            focus_areas = summary.focus_areas.len(),
            desired_changes = summary.desired_changes.len(),
            first_save,
            "therapy goals saved"
        );
        Ok(summary)
    }

    /// Load the stored goals, or `None` if none have been defined yet.
    pub async fn load(&self) -> Result<Option<GoalsSummary>, StorageError> {
        let summary = self.records.load().await?;
        tracing::debug!(present = summary.is_some(), "therapy goals loaded");
        Ok(summary)
    }

    /// True iff a record exists and names at least one focus area.
    pub async fn has_goals(&self) -> Result<bool, StorageError> {
        Ok(self
            .load()
            .await?
            .is_some_and(|summary| summary.has_focus_areas()))
    }

    /// Edit previously defined goals. A full replacement, same as [`save`].
    ///
    /// [`save`]: GoalsStore::save
    pub async fn update(
        &self,
        focus_areas: Vec<String>,
        desired_changes: Vec<String>,
    ) -> Result<GoalsSummary, StorageError> {
        self.save(focus_areas, desired_changes).await
    }

    /// Prompt-context sentence for the stored goals, or `""` when there are
    /// none (no record, or no focus areas).
    pub async fn context_fragment(&self) -> Result<String, StorageError> {
        Ok(self
            .load()
            .await?
            .map(|summary| summary.context_fragment())
            .unwrap_or_default())
    }

    /// Remove the stored goals. Succeeds whether or not anything was stored.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let removed = self.records.clear().await?;
        tracing::debug!(removed, "therapy goals cleared");
        Ok(())
    }

    /// Bulk-deletion entry point. Same as [`clear`].
    ///
    /// [`clear`]: GoalsStore::clear
    pub async fn delete_all(&self) -> Result<(), StorageError> {
        self.clear().await
    }
}
