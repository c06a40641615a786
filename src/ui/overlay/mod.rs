// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the toast and modal registries.
//!
//! - [`IdSequence`] hands out monotonically increasing identifiers.
//! - [`Deferred`] owns the delayed actions (auto-dismiss, grace-period
//!   deletion) of a registry, keyed per entry so they can be cancelled.

mod deferred;
mod sequence;

pub use deferred::Deferred;
pub use sequence::IdSequence;

use crate::config::REMOVAL_GRACE_MS;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Delay between a logical removal and the physical deletion of an entry.
#[must_use]
pub fn removal_grace() -> Duration {
    Duration::from_millis(REMOVAL_GRACE_MS)
}

/// Locks shared state, recovering it if a panic happened while it was held.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
