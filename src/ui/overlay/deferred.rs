// SPDX-License-Identifier: MPL-2.0
//! Keyed, cancellable delayed actions.
//!
//! Every action runs on its own Tokio task. The abort handles live here, so
//! dropping a `Deferred` (together with the registry state owning it) aborts
//! every action that has not fired yet.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::task::AbortHandle;

/// Set of pending delayed actions, at most one per key.
#[derive(Debug)]
pub struct Deferred<K> {
    tasks: HashMap<K, AbortHandle>,
}

impl<K> Default for Deferred<K> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Deferred<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `action` once `delay` has elapsed.
    ///
    /// An action already pending under the same key is aborted and replaced.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn schedule<F>(&mut self, key: K, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        if let Some(previous) = self.tasks.insert(key, handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Aborts the action pending under `key`. Returns `false` if there was none.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.tasks.remove(key) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Drops the bookkeeping for `key` without aborting anything.
    ///
    /// Called by an action that is currently running, to clear its own entry.
    pub fn forget(&mut self, key: &K) {
        self.tasks.remove(key);
    }

    /// Number of actions that have not completed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }
}

impl<K> Drop for Deferred<K> {
    fn drop(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
    }
}
