//! Clock port

use chrono::{DateTime, Utc};

/// Source of wall-clock time for timestamps and the autosave window
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
