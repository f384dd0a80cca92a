//! Key-value storage port
//!
//! Durable storage of JSON blobs under named keys. Calls are synchronous.
//! `set` either replaces the whole value or fails leaving the previous value
//! intact; there are no transactions and no schema migration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("storage disabled")]
    Disabled,

    #[error("invalid key {0:?}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Key-value storage port
pub trait KeyValueStorage: Send + Sync {
    /// Stored value, or `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;

    /// Drop `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
