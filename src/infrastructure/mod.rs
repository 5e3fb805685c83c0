//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{open_storage, InMemoryStore, JsonFileStore, KeyValueStore};
