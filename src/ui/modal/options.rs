// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied modal options.

use super::entry::{Callback, ConfirmCallback, ModalSize, Props};
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Optional settings for [`ModalRegistry::open`](super::ModalRegistry::open).
///
/// Every field left unset is defaulted by the registry.
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub id: Option<String>,
    pub props: Option<Props>,
    pub size: Option<ModalSize>,
    pub title: Option<String>,
    pub closable: Option<bool>,
    pub mask_closable: Option<bool>,
    pub show_footer: Option<bool>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub on_confirm: Option<ConfirmCallback>,
    pub on_cancel: Option<Callback>,
    pub on_close: Option<Callback>,
}

impl ModalOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<ModalSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    #[must_use]
    pub fn mask_closable(mut self, mask_closable: bool) -> Self {
        self.mask_closable = Some(mask_closable);
        self
    }

    #[must_use]
    pub fn show_footer(mut self, show_footer: bool) -> Self {
        self.show_footer = Some(show_footer);
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn on_confirm<F, Fut>(mut self, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.on_confirm = Some(Arc::new(move || callback().boxed()));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(callback));
        self
    }

    /// Fills every unset field from `defaults`. Fields set on `self` win.
    #[must_use]
    pub fn or(self, defaults: ModalOptions) -> Self {
        Self {
            id: self.id.or(defaults.id),
            props: self.props.or(defaults.props),
            size: self.size.or(defaults.size),
            title: self.title.or(defaults.title),
            closable: self.closable.or(defaults.closable),
            mask_closable: self.mask_closable.or(defaults.mask_closable),
            show_footer: self.show_footer.or(defaults.show_footer),
            confirm_text: self.confirm_text.or(defaults.confirm_text),
            cancel_text: self.cancel_text.or(defaults.cancel_text),
            on_confirm: self.on_confirm.or(defaults.on_confirm),
            on_cancel: self.on_cancel.or(defaults.on_cancel),
            on_close: self.on_close.or(defaults.on_close),
        }
    }
}

impl fmt::Debug for ModalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalOptions")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("size", &self.size)
            .field("title", &self.title)
            .field("closable", &self.closable)
            .field("mask_closable", &self.mask_closable)
            .field("show_footer", &self.show_footer)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
