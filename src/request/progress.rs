// SPDX-License-Identifier: MPL-2.0
//! Global busy indicator around in-flight requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Receives start/finish notifications for every request.
pub trait BusyIndicator: Send + Sync {
    fn start(&self);
    fn done(&self);
}

/// Keeps an indicator busy for as long as it is alive.
///
/// `done` runs on drop, so a request future cancelled mid-flight still
/// releases its slot.
pub(crate) struct BusyGuard<'a>(&'a dyn BusyIndicator);

impl<'a> BusyGuard<'a> {
    pub(crate) fn start(indicator: &'a dyn BusyIndicator) -> Self {
        indicator.start();
        Self(indicator)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.done();
    }
}

/// Counts in-flight requests and publishes whether any is running.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    in_flight: Arc<AtomicUsize>,
    busy: Arc<watch::Sender<bool>>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            in_flight: Arc::new(AtomicUsize::new(0)),
            busy: Arc::new(busy),
        }
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }
}

impl BusyIndicator for ProgressTracker {
    fn start(&self) {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.busy.send_replace(true);
        }
    }

    fn done(&self) {
        let previous = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if previous == Ok(1) {
            self.busy.send_replace(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_until_last_request_finishes() {
        let tracker = ProgressTracker::new();
        tracker.start();
        tracker.start();
        assert!(tracker.is_busy());

        tracker.done();
        assert!(tracker.is_busy());
        tracker.done();
        assert!(!tracker.is_busy());
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn guard_releases_on_drop() {
        let tracker = ProgressTracker::new();
        {
            let _outer = BusyGuard::start(&tracker);
            let inner = BusyGuard::start(&tracker);
            assert_eq!(tracker.in_flight(), 2);
            drop(inner);
            assert!(tracker.is_busy());
        }
        assert!(!tracker.is_busy());
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn unbalanced_done_is_ignored() {
        let tracker = ProgressTracker::new();
        tracker.done();
        assert_eq!(tracker.in_flight(), 0);
        assert!(!tracker.is_busy());
    }
}
