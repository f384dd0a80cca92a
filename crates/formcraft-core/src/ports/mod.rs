//! Ports module
//!
//! Interfaces the application layer needs from its environment.

pub mod clock;
pub mod storage;

pub use clock::Clock;
pub use storage::{KeyValueStorage, StorageError};
