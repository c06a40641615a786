// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme state.
//!
//! The choice is persisted under the `isDark` storage key as a JSON boolean
//! and published to subscribers on every change.

use crate::storage::{Storage, IS_DARK_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme, shared by every clone.
#[derive(Clone)]
pub struct ThemeState {
    storage: Arc<dyn Storage>,
    publisher: Arc<watch::Sender<Theme>>,
    // Serializes read-modify-write sequences such as toggling.
    guard: Arc<Mutex<()>>,
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.current_theme())
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Creates the state with `initial` as current theme, without persisting it.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, initial: Theme) -> Self {
        let (publisher, _) = watch::channel(initial);
        Self {
            storage,
            publisher: Arc::new(publisher),
            guard: Arc::new(Mutex::new(())),
        }
    }

    /// Restores the persisted choice.
    ///
    /// A missing or unreadable `isDark` value keeps the current theme.
    pub fn init_theme(&self) -> Theme {
        let stored = self.storage.get_item(IS_DARK_KEY);
        match stored.as_deref().map(serde_json::from_str::<bool>) {
            Some(Ok(dark)) => {
                self.publisher.send_replace(Theme::from_dark(dark));
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring invalid persisted theme");
            }
            None => {}
        }
        self.current_theme()
    }

    pub fn set_theme(&self, theme: Theme) {
        let _guard = crate::ui::overlay::lock(&self.guard);
        self.apply(theme);
    }

    pub fn set_dark(&self, dark: bool) {
        self.set_theme(Theme::from_dark(dark));
    }

    /// Switches between light and dark; returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let _guard = crate::ui::overlay::lock(&self.guard);
        let theme = self.current_theme().toggled();
        self.apply(theme);
        theme
    }

    fn apply(&self, theme: Theme) {
        self.storage
            .set_item(IS_DARK_KEY, if theme.is_dark() { "true" } else { "false" });
        self.publisher.send_replace(theme);
        tracing::debug!(%theme, "theme changed");
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        *self.publisher.borrow()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current_theme().is_dark()
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.publisher.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> (Arc<MemoryStorage>, ThemeState) {
        let storage = Arc::new(MemoryStorage::new());
        let theme = ThemeState::new(storage.clone(), Theme::Light);
        (storage, theme)
    }

    #[test]
    fn toggle_persists_json_boolean() {
        let (storage, theme) = state();
        assert!(theme.is_light());

        assert_eq!(theme.toggle_theme(), Theme::Dark);
        assert!(theme.is_dark());
        assert_eq!(storage.get_item(IS_DARK_KEY).as_deref(), Some("true"));

        assert_eq!(theme.toggle_theme(), Theme::Light);
        assert_eq!(storage.get_item(IS_DARK_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn init_restores_persisted_choice() {
        let (storage, theme) = state();
        storage.set_item(IS_DARK_KEY, "true");
        assert_eq!(theme.init_theme(), Theme::Dark);
    }

    #[test]
    fn init_keeps_current_on_missing_or_invalid_value() {
        let (storage, theme) = state();
        assert_eq!(theme.init_theme(), Theme::Light);

        storage.set_item(IS_DARK_KEY, "definitely");
        assert_eq!(theme.init_theme(), Theme::Light);
    }

    #[test]
    fn subscribers_observe_changes() {
        let (_storage, theme) = state();
        let mut receiver = theme.subscribe();
        theme.set_dark(true);
        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), Theme::Dark);
        assert_eq!(theme.current_theme(), Theme::Dark);
    }
}
