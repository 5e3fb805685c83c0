//! Storage trait definitions

use crate::shared::DomainResult;

/// Synchronous key-value port backing every entity collection.
///
/// Values are whole serialized collections; `set` replaces any prior value.
/// One instance is constructed per process and shared by all stores.
pub trait KeyValueStore: Send + Sync {
    /// Raw value under `key`, `None` when nothing was written yet.
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
