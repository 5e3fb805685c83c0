//! Entity store: the authoritative in-memory collection of one record type
//!
//! The collection is read once from storage when the store is opened and
//! written back in full after every mutation. Stored values that fail to
//! parse are treated as an empty collection.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Entity, RecordId};
use crate::infrastructure::KeyValueStore;
use crate::shared::{DomainError, DomainResult};

pub struct EntityStore<E: Entity> {
    storage: Arc<dyn KeyValueStore>,
    records: Vec<E>,
}

impl<E: Entity> EntityStore<E> {
    /// Read the collection stored under `E::STORAGE_KEY`.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> DomainResult<Self> {
        let records = match storage.get(E::STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<E>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        key = E::STORAGE_KEY,
                        error = %e,
                        "Stored collection is unreadable, starting empty"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(key = E::STORAGE_KEY, count = records.len(), "Collection loaded");
        Ok(Self { storage, records })
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Owned copy of the current collection.
    pub fn snapshot(&self) -> Vec<E> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Id the next `add` will assign: highest existing id + 1.
    ///
    /// Fails once the highest id is `RecordId::MAX`.
    pub fn next_id(&self) -> DomainResult<RecordId> {
        let highest = self.records.iter().map(E::id).max().unwrap_or(0);
        highest.checked_add(1).ok_or_else(|| {
            DomainError::Storage(format!("No {} ids left after {}", E::NAME, highest))
        })
    }

    /// Write the whole collection, replacing the stored value.
    pub fn persist(&self) -> DomainResult<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.storage.set(E::STORAGE_KEY, &raw)?;
        debug!(key = E::STORAGE_KEY, count = self.records.len(), "Collection persisted");
        Ok(())
    }

    /// Append a new record under the next id and persist.
    pub fn add(&mut self, draft: E::Draft) -> DomainResult<E> {
        let id = self.next_id()?;
        let record = E::from_draft(id, draft)?;
        self.records.push(record.clone());
        self.persist()?;
        info!(entity = E::NAME, id, "Record added");
        Ok(record)
    }

    /// Replace the record matching `id` with `patch`.
    ///
    /// Returns `None` when nothing matches. The collection is persisted
    /// either way.
    pub fn update(&mut self, id: RecordId, patch: E::Draft) -> DomainResult<Option<E>> {
        let updated = match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                let record = E::from_draft(id, patch)?;
                *slot = record.clone();
                Some(record)
            }
            None => None,
        };
        self.persist()?;
        match &updated {
            Some(_) => info!(entity = E::NAME, id, "Record updated"),
            None => debug!(entity = E::NAME, id, "Update matched no record"),
        }
        Ok(updated)
    }

    /// Remove the record matching `id` and persist. Related records in
    /// other collections are left untouched.
    pub fn delete(&mut self, id: RecordId) -> DomainResult<Option<E>> {
        let removed = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .map(|idx| self.records.remove(idx));
        self.persist()?;
        if removed.is_some() {
            info!(entity = E::NAME, id, "Record deleted");
        }
        Ok(removed)
    }
}
