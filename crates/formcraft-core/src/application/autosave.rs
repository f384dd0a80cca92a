//! Background autosave driver
//!
//! Ticks on a tokio interval and lets the store decide whether its
//! debounce window has elapsed. The store lock is never held across an
//! await point.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::store::SharedFormStore;

/// Running autosave task; aborted when dropped
pub struct AutosaveHandle {
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AutosaveHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the autosave loop on the current tokio runtime
pub fn spawn_autosave(store: SharedFormStore, tick: Duration) -> AutosaveHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let result = store.lock().poll_autosave();
            match result {
                Ok(Some(form_id)) => tracing::debug!(form_id = %form_id, "autosaved"),
                Ok(None) => {}
                Err(err) => tracing::warn!(error = %err, "autosave failed, will retry"),
            }
        }
    });
    AutosaveHandle { task }
}
