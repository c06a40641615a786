// SPDX-License-Identifier: MPL-2.0
//! Modal entry and its vocabularies.

use futures_util::future::BoxFuture;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Property bag handed to the rendered content.
pub type Props = Map<String, Value>;

/// Synchronous callback (`on_cancel`, `on_close`).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Asynchronous confirmation callback.
pub type ConfirmCallback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Width class of a modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
    Auto,
    /// Any other class name, passed through to the renderer.
    Custom(String),
}

impl ModalSize {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Xl => "xl",
            ModalSize::Full => "full",
            ModalSize::Auto => "auto",
            ModalSize::Custom(class) => class,
        }
    }
}

impl From<&str> for ModalSize {
    fn from(value: &str) -> Self {
        match value {
            "sm" => ModalSize::Sm,
            "md" => ModalSize::Md,
            "lg" => ModalSize::Lg,
            "xl" => ModalSize::Xl,
            "full" => ModalSize::Full,
            "auto" => ModalSize::Auto,
            other => ModalSize::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the content a renderer draws inside the modal frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModalContent(String);

impl ModalContent {
    const CONFIRM: &'static str = "confirm";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The built-in confirmation dialog.
    #[must_use]
    pub fn confirm() -> Self {
        Self::new(Self::CONFIRM)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalContent {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ModalContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A modal as seen by renderers.
#[derive(Clone)]
pub struct Modal {
    /// Registry-internal identity, distinct for every opened entry.
    pub(crate) key: u64,
    pub(crate) id: String,
    pub(crate) content: ModalContent,
    pub(crate) props: Props,
    pub(crate) size: ModalSize,
    pub(crate) title: Option<String>,
    pub(crate) closable: bool,
    pub(crate) mask_closable: bool,
    pub(crate) show_footer: bool,
    pub(crate) confirm_text: String,
    pub(crate) cancel_text: String,
    pub(crate) on_confirm: Option<ConfirmCallback>,
    pub(crate) on_cancel: Option<Callback>,
    pub(crate) on_close: Option<Callback>,
    pub(crate) visible: bool,
    pub(crate) loading: bool,
}

impl Modal {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    #[must_use]
    pub fn size(&self) -> &ModalSize {
        &self.size
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn is_mask_closable(&self) -> bool {
        self.mask_closable
    }

    #[must_use]
    pub fn shows_footer(&self) -> bool {
        self.show_footer
    }

    #[must_use]
    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    #[must_use]
    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }

    /// `false` once a close has started; the entry lingers for the grace window.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("props", &self.props)
            .field("size", &self.size)
            .field("title", &self.title)
            .field("closable", &self.closable)
            .field("mask_closable", &self.mask_closable)
            .field("show_footer", &self.show_footer)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("visible", &self.visible)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sizes_round_trip_and_others_pass_through() {
        for name in ["sm", "md", "lg", "xl", "full", "auto"] {
            assert_eq!(ModalSize::from(name).as_str(), name);
        }
        assert_eq!(
            ModalSize::from("w-1/2"),
            ModalSize::Custom("w-1/2".to_string())
        );
        assert_eq!(ModalSize::default(), ModalSize::Md);
    }

    #[test]
    fn confirm_content_name() {
        assert_eq!(ModalContent::confirm().as_str(), "confirm");
        assert_eq!(ModalContent::from("proxy-form").to_string(), "proxy-form");
    }
}
