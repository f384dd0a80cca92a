//! Storage backends

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::storage::{KeyValueStorage, StorageError};

/// Build the backend selected in config
pub fn open_storage(config: &StorageConfig) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
    let storage: Arc<dyn KeyValueStorage> = match config.backend {
        StorageBackend::Memory => {
            let mut memory = InMemoryStorage::new();
            if let Some(quota) = config.quota_bytes {
                memory = memory.with_quota(quota);
            }
            Arc::new(memory)
        }
        StorageBackend::File => Arc::new(JsonFileStorage::open(config.data_dir())?),
    };
    tracing::debug!(backend = ?config.backend, "storage opened");
    Ok(storage)
}
