//! Debounce window
//!
//! An explicit, cancellable deadline. Each `schedule` pushes the deadline
//! to `now + window`, so a save only fires after the edits go quiet.
//! Nothing here sleeps; the owner polls with the current time.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<DateTime<Utc>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// (Re)start the window from `now`
    pub fn schedule(&mut self, now: DateTime<Utc>) {
        self.deadline = Some(now + self.window);
    }

    /// Returns whether something was pending
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Clear and report the deadline if it has passed
    pub fn take_due(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiescence() {
        let t0 = Utc::now();
        let mut d = Debouncer::new(Duration::seconds(1));
        d.schedule(t0);
        assert!(!d.take_due(t0 + Duration::milliseconds(999)));
        assert!(d.take_due(t0 + Duration::seconds(1)));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_new_edit_restarts_window() {
        let t0 = Utc::now();
        let mut d = Debouncer::new(Duration::seconds(1));
        d.schedule(t0);
        d.schedule(t0 + Duration::milliseconds(800));
        assert!(!d.take_due(t0 + Duration::milliseconds(1200)));
        assert!(d.take_due(t0 + Duration::milliseconds(1800)));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new(Duration::seconds(1));
        assert!(!d.cancel());
        d.schedule(Utc::now());
        assert!(d.cancel());
        assert!(!d.take_due(Utc::now() + Duration::days(1)));
    }
}
