//! In-memory storage (tests, previews and ephemeral sessions)

use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::storage::{KeyValueStorage, StorageError};

/// In-memory key-value storage with an optional byte quota
///
/// The quota counts the serialized size of every stored value, like a
/// browser's per-origin storage limit.
#[derive(Debug)]
pub struct InMemoryStorage {
    entries: DashMap<String, serde_json::Value>,
    quota_bytes: Option<usize>,
    enabled: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            quota_bytes: None,
            enabled: AtomicBool::new(true),
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Simulate storage being switched off by the host
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_enabled(&self) -> Result<(), StorageError> {
        if self.enabled.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Disabled)
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> Result<usize, StorageError> {
        let mut total = 0;
        for entry in self.entries.iter() {
            if entry.key() != key {
                total += entry.key().len() + serde_json::to_vec(entry.value())?.len();
            }
        }
        Ok(total)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        self.ensure_enabled()?;
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        if let Some(quota) = self.quota_bytes {
            let needed =
                self.used_bytes_excluding(key)? + key.len() + serde_json::to_vec(&value)?.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", json!([1, 2])).unwrap();
        assert_eq!(storage.get("k").unwrap(), Some(json!([1, 2])));
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_keeps_previous_value() {
        let storage = InMemoryStorage::new().with_quota(16);
        storage.set("k", json!("small")).unwrap();
        let err = storage.set("k", json!("this value is far too large")).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 16, .. }));
        assert_eq!(storage.get("k").unwrap(), Some(json!("small")));
    }

    #[test]
    fn test_disabled_storage() {
        let storage = InMemoryStorage::new();
        storage.set_enabled(false);
        assert_eq!(storage.get("k"), Err(StorageError::Disabled));
        assert_eq!(storage.set("k", json!(1)), Err(StorageError::Disabled));
    }
}
