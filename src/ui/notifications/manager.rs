// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastRegistry` keeps the ordered list of live toasts. Each toast is
//! dismissed automatically once its duration elapses, flagged as `removing`
//! for the exit animation, then deleted after the grace window.

use super::notification::{Toast, ToastId, ToastKind, ToastPosition};
use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::ui::overlay::{self, Deferred, IdSequence};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Which delayed action a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Phase {
    Dismiss,
    Purge,
}

#[derive(Debug)]
struct State {
    toasts: Vec<Toast>,
    ids: IdSequence,
    timers: Deferred<(ToastId, Phase)>,
    publisher: watch::Sender<Vec<Toast>>,
}

impl State {
    fn publish(&self) {
        self.publisher.send_replace(self.toasts.clone());
    }
}

/// Shared handle over the live toast list.
///
/// Cloning is cheap; all clones observe the same toasts. Dropping the last
/// clone aborts every pending timer.
#[derive(Debug, Clone)]
pub struct ToastRegistry {
    state: Arc<Mutex<State>>,
}

impl Default for ToastRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastRegistry {
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(Mutex::new(State {
                toasts: Vec::new(),
                ids: IdSequence::new(),
                timers: Deferred::new(),
                publisher,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        overlay::lock(&self.state)
    }

    fn upgrade(state: &Weak<Mutex<State>>) -> Option<Self> {
        state.upgrade().map(|state| Self { state })
    }

    /// Shows a toast and schedules its dismissal.
    ///
    /// An unknown `position` is replaced by the default anchor; a missing one
    /// uses it too. A missing `duration` falls back to
    /// [`DEFAULT_TOAST_DURATION_MS`].
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn add(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        position: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        let position = position
            .map(ToastPosition::parse_or_default)
            .unwrap_or_default();
        let duration = duration.unwrap_or(Duration::from_millis(DEFAULT_TOAST_DURATION_MS));

        let mut state = self.lock();
        let id = ToastId(state.ids.next_id());
        state.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            position,
            duration,
            removing: false,
        });

        let weak = Arc::downgrade(&self.state);
        state.timers.schedule((id, Phase::Dismiss), duration, move || {
            if let Some(registry) = Self::upgrade(&weak) {
                registry.remove(id);
            }
        });
        state.publish();

        tracing::debug!(id = %id, %kind, %position, ?duration, "toast added");
        id
    }

    /// Starts the exit animation of a toast and schedules its deletion.
    ///
    /// Unknown ids and toasts already being removed are ignored.
    pub fn remove(&self, id: ToastId) {
        let mut state = self.lock();
        let Some(toast) = state.toasts.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if toast.removing {
            return;
        }
        toast.removing = true;

        state.timers.cancel(&(id, Phase::Dismiss));
        let weak = Arc::downgrade(&self.state);
        state
            .timers
            .schedule((id, Phase::Purge), overlay::removal_grace(), move || {
                if let Some(registry) = Self::upgrade(&weak) {
                    registry.purge(id);
                }
            });
        state.publish();

        tracing::debug!(id = %id, "toast removing");
    }

    fn purge(&self, id: ToastId) {
        let mut state = self.lock();
        state.timers.forget(&(id, Phase::Purge));
        if let Some(index) = state.toasts.iter().position(|t| t.id == id) {
            state.toasts.remove(index);
            state.publish();
        }
    }

    /// Returns a snapshot of the live toasts, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// Subscribes to snapshots published after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.lock().publisher.subscribe()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }
}
