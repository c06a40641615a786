// SPDX-License-Identifier: MPL-2.0
//! Modal stack management.
//!
//! `ModalRegistry` keeps the ordered stack of open modals. Closing hides an
//! entry at once and destroys it after the grace window, invoking its
//! `on_close` callback exactly once.
//!
//! Delayed actions target the internal key of an entry rather than its public
//! id, so a timer scheduled for a replaced entry can never reach the entry
//! that replaced it.

use super::entry::{Modal, ModalContent, Props};
use super::options::ModalOptions;
use crate::i18n::I18n;
use crate::ui::overlay::{self, Deferred, IdSequence};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tokio::sync::watch;

/// Where a renderer-initiated dismissal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSource {
    /// Click on the backdrop.
    Mask,
    /// The frame's close button.
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Timer {
    Close(u64),
    CloseAll(u64),
}

#[derive(Debug)]
struct State {
    modals: Vec<Modal>,
    ids: IdSequence,
    keys: IdSequence,
    timers: Deferred<Timer>,
    publisher: watch::Sender<Vec<Modal>>,
}

impl State {
    fn publish(&self) {
        self.publisher.send_replace(self.modals.clone());
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Modal> {
        self.modals.iter_mut().find(|m| m.id == id)
    }

    fn take(&mut self, key: u64) -> Option<Modal> {
        let index = self.modals.iter().position(|m| m.key == key)?;
        Some(self.modals.remove(index))
    }
}

/// Shared handle over the modal stack.
#[derive(Clone)]
pub struct ModalRegistry {
    state: Arc<Mutex<State>>,
    i18n: Arc<I18n>,
}

impl std::fmt::Debug for ModalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalRegistry")
            .field("modals", &self.lock().modals)
            .finish_non_exhaustive()
    }
}

impl ModalRegistry {
    /// Creates an empty stack. `i18n` provides the default button labels.
    #[must_use]
    pub fn new(i18n: Arc<I18n>) -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            state: Arc::new(Mutex::new(State {
                modals: Vec::new(),
                ids: IdSequence::new(),
                keys: IdSequence::new(),
                timers: Deferred::new(),
                publisher,
            })),
            i18n,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        overlay::lock(&self.state)
    }

    fn weak(&self) -> (Weak<Mutex<State>>, Arc<I18n>) {
        (Arc::downgrade(&self.state), Arc::clone(&self.i18n))
    }

    fn upgrade(state: &Weak<Mutex<State>>, i18n: &Arc<I18n>) -> Option<Self> {
        state.upgrade().map(|state| Self {
            state,
            i18n: Arc::clone(i18n),
        })
    }

    pub(crate) fn i18n(&self) -> &Arc<I18n> {
        &self.i18n
    }

    /// Opens a modal showing `content` and returns its id.
    ///
    /// Without an id in `options`, one of the form `modal_<n>` is generated.
    /// A live modal with the same id is replaced: it is removed together with
    /// its pending close, and its `on_close` is not invoked.
    pub fn open(&self, content: impl Into<ModalContent>, options: ModalOptions) -> String {
        let confirm_text = non_empty(options.confirm_text)
            .unwrap_or_else(|| self.i18n.tr("common-confirm"));
        let cancel_text =
            non_empty(options.cancel_text).unwrap_or_else(|| self.i18n.tr("common-cancel"));

        let mut state = self.lock();
        let id = match non_empty(options.id) {
            Some(id) => id,
            None => format!("modal_{}", state.ids.next_id()),
        };

        if let Some(index) = state.modals.iter().position(|m| m.id == id) {
            let replaced = state.modals.remove(index);
            state.timers.cancel(&Timer::Close(replaced.key));
            tracing::debug!(id = %id, "replacing open modal");
        }

        let modal = Modal {
            key: state.keys.next_id(),
            id: id.clone(),
            content: content.into(),
            props: options.props.unwrap_or_default(),
            size: options.size.unwrap_or_default(),
            title: options.title,
            closable: options.closable.unwrap_or(true),
            mask_closable: options.mask_closable.unwrap_or(true),
            show_footer: options.show_footer.unwrap_or(false),
            confirm_text,
            cancel_text,
            on_confirm: options.on_confirm,
            on_cancel: options.on_cancel,
            on_close: options.on_close,
            visible: true,
            loading: false,
        };
        tracing::debug!(id = %id, content = %modal.content, size = %modal.size, "modal opened");
        state.modals.push(modal);
        state.publish();
        id
    }

    /// Hides a modal and destroys it after the grace window.
    ///
    /// Unknown ids and modals already closing are ignored.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn close(&self, id: &str) {
        let mut state = self.lock();
        let Some(modal) = state.find_mut(id) else {
            return;
        };
        if !modal.visible {
            return;
        }
        modal.visible = false;
        let key = modal.key;

        let (weak, i18n) = self.weak();
        state
            .timers
            .schedule(Timer::Close(key), overlay::removal_grace(), move || {
                if let Some(registry) = Self::upgrade(&weak, &i18n) {
                    registry.destroy(key);
                }
            });
        state.publish();
        tracing::debug!(id, "modal closing");
    }

    fn destroy(&self, key: u64) {
        let removed = {
            let mut state = self.lock();
            state.timers.forget(&Timer::Close(key));
            let removed = state.take(key);
            if removed.is_some() {
                state.publish();
            }
            removed
        };

        if let Some(modal) = removed {
            tracing::debug!(id = %modal.id, "modal destroyed");
            if let Some(on_close) = modal.on_close {
                on_close();
            }
        }
    }

    /// Hides every live modal and destroys them together after the grace window.
    ///
    /// `on_close` callbacks run in stack order. Modals opened during the
    /// grace window are not affected.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn close_all(&self) {
        let mut state = self.lock();
        if state.modals.is_empty() {
            return;
        }
        let mut keys = Vec::with_capacity(state.modals.len());
        for modal in &mut state.modals {
            modal.visible = false;
            keys.push(modal.key);
        }

        let batch = state.keys.next_id();
        let (weak, i18n) = self.weak();
        state
            .timers
            .schedule(Timer::CloseAll(batch), overlay::removal_grace(), move || {
                if let Some(registry) = Self::upgrade(&weak, &i18n) {
                    registry.destroy_batch(batch, &keys);
                }
            });
        state.publish();
        tracing::debug!(count = state.modals.len(), "closing all modals");
    }

    fn destroy_batch(&self, batch: u64, keys: &[u64]) {
        let removed: Vec<Modal> = {
            let mut state = self.lock();
            state.timers.forget(&Timer::CloseAll(batch));
            let removed: Vec<Modal> = keys.iter().filter_map(|key| state.take(*key)).collect();
            for modal in &removed {
                state.timers.cancel(&Timer::Close(modal.key));
            }
            if !removed.is_empty() {
                state.publish();
            }
            removed
        };

        for modal in removed {
            if let Some(on_close) = modal.on_close {
                on_close();
            }
        }
    }

    /// Sets the loading flag of a modal. Unknown ids are ignored.
    pub fn set_loading(&self, id: &str, loading: bool) {
        let mut state = self.lock();
        if let Some(modal) = state.find_mut(id) {
            modal.loading = loading;
            state.publish();
        }
    }

    /// Shallow-merges `partial` into the props of a modal. Unknown ids are ignored.
    pub fn update_props(&self, id: &str, partial: Props) {
        let mut state = self.lock();
        if let Some(modal) = state.find_mut(id) {
            modal.props.extend(partial);
            state.publish();
        }
    }

    /// Confirms a modal: shows the loading state while `on_confirm` runs,
    /// then closes it.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub async fn accept(&self, id: &str) {
        let (key, on_confirm) = {
            let mut state = self.lock();
            let Some(modal) = state.find_mut(id).filter(|m| m.visible) else {
                return;
            };
            let Some(on_confirm) = modal.on_confirm.clone() else {
                drop(state);
                self.close(id);
                return;
            };
            modal.loading = true;
            let key = modal.key;
            state.publish();
            (key, on_confirm)
        };

        on_confirm().await;

        let still_open = {
            let mut state = self.lock();
            match state.modals.iter_mut().find(|m| m.key == key) {
                Some(modal) => {
                    modal.loading = false;
                    state.publish();
                    true
                }
                None => false,
            }
        };
        // The modal may have been replaced while the callback ran.
        if still_open {
            self.close(id);
        }
    }

    /// Cancels a modal: invokes `on_cancel`, then closes it.
    pub fn reject(&self, id: &str) {
        let on_cancel = {
            let state = self.lock();
            let Some(modal) = state.modals.iter().find(|m| m.id == id && m.visible) else {
                return;
            };
            modal.on_cancel.clone()
        };
        if let Some(on_cancel) = on_cancel {
            on_cancel();
        }
        self.close(id);
    }

    /// Closes a modal on a mask click or close button press, if its flags allow it.
    ///
    /// Returns whether the modal started closing.
    pub fn dismiss(&self, id: &str, source: DismissSource) -> bool {
        let allowed = {
            let state = self.lock();
            state
                .modals
                .iter()
                .find(|m| m.id == id && m.visible)
                .is_some_and(|m| match source {
                    DismissSource::Mask => m.mask_closable,
                    DismissSource::CloseButton => m.closable,
                })
        };
        if allowed {
            self.close(id);
        }
        allowed
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Modal> {
        self.lock().modals.iter().find(|m| m.id == id).cloned()
    }

    /// Returns a snapshot of the stack, bottom first.
    #[must_use]
    pub fn modals(&self) -> Vec<Modal> {
        self.lock().modals.clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Modal>> {
        self.lock().publisher.subscribe()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().modals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().modals.is_empty()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
