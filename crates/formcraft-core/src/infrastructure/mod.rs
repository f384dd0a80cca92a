//! Infrastructure layer
//!
//! Concrete adapters for the ports: storage backends and clocks.

pub mod clock;
pub mod persistence;

pub use clock::{ManualClock, SystemClock};
pub use persistence::{open_storage, InMemoryStorage, JsonFileStorage};
