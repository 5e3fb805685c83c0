//! Storage traits and implementations

mod file;
mod memory;
mod traits;

use std::sync::Arc;

use tracing::info;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::shared::DomainResult;

/// Build the storage port selected by configuration.
pub fn open_storage(config: &StorageConfig) -> DomainResult<Arc<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage; changes are discarded on exit");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            let store = JsonFileStore::open(config.resolved_data_dir())?;
            info!("Using file storage at {}", store.dir().display());
            Ok(Arc::new(store))
        }
    }
}
