// SPDX-License-Identifier: MPL-2.0
//! Convenience entry points over the modal registry.

use super::entry::{ModalContent, ModalSize, Props};
use super::manager::ModalRegistry;
use super::options::ModalOptions;
use serde_json::Value;

/// Modal facade handed to application code.
#[derive(Debug, Clone)]
pub struct ModalService {
    modals: ModalRegistry,
}

impl ModalService {
    #[must_use]
    pub fn new(modals: ModalRegistry) -> Self {
        Self { modals }
    }

    #[must_use]
    pub fn registry(&self) -> &ModalRegistry {
        &self.modals
    }

    pub fn open(&self, content: impl Into<ModalContent>, options: ModalOptions) -> String {
        self.modals.open(content, options)
    }

    /// Opens the built-in confirmation dialog.
    ///
    /// Defaults to a small dialog with a footer, a localized title and a
    /// localized `message` prop.
    pub fn confirm(&self, options: ModalOptions) -> String {
        let i18n = self.modals.i18n();
        let mut props = Props::new();
        props.insert(
            "message".to_string(),
            Value::String(i18n.tr("confirmations-confirm-text")),
        );
        let defaults = ModalOptions::new()
            .props(props)
            .show_footer(true)
            .size(ModalSize::Sm)
            .title(i18n.tr("confirmations-confirm-tips"));

        self.modals.open(ModalContent::confirm(), options.or(defaults))
    }

    /// Opens an informational dialog, closable from the mask or the close button.
    pub fn info(&self, content: impl Into<ModalContent>, options: ModalOptions) -> String {
        let defaults = ModalOptions::new()
            .size(ModalSize::Md)
            .closable(true)
            .mask_closable(true);
        self.modals.open(content, options.or(defaults))
    }

    pub fn fullscreen(&self, content: impl Into<ModalContent>, options: ModalOptions) -> String {
        self.modals
            .open(content, options.or(ModalOptions::new().size(ModalSize::Full)))
    }

    pub fn close(&self, id: &str) {
        self.modals.close(id);
    }

    pub fn close_all(&self) {
        self.modals.close_all();
    }

    pub fn set_loading(&self, id: &str, loading: bool) {
        self.modals.set_loading(id, loading);
    }

    pub fn update_props(&self, id: &str, props: Props) {
        self.modals.update_props(id, props);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::I18n;
    use serde_json::json;
    use std::sync::Arc;

    fn service(locale: &str) -> ModalService {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default(), None);
        ModalService::new(ModalRegistry::new(Arc::new(i18n)))
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_uses_localized_defaults() {
        let modals = service("en-US");
        let id = modals.confirm(ModalOptions::new());

        let modal = modals.registry().get(&id).unwrap();
        assert_eq!(modal.content(), &ModalContent::confirm());
        assert_eq!(modal.size(), &ModalSize::Sm);
        assert!(modal.shows_footer());
        assert_eq!(modal.title(), Some("Confirm"));
        assert!(modal.props()["message"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn confirm_caller_options_win() {
        let modals = service("zh-CN");
        let mut props = Props::new();
        props.insert("message".into(), json!("Delete proxy 3?"));
        let id = modals.confirm(
            ModalOptions::new()
                .id("delete-proxy")
                .title("Delete")
                .size("lg")
                .props(props),
        );

        assert_eq!(id, "delete-proxy");
        let modal = modals.registry().get(&id).unwrap();
        assert_eq!(modal.title(), Some("Delete"));
        assert_eq!(modal.size(), &ModalSize::Lg);
        assert_eq!(modal.props()["message"], json!("Delete proxy 3?"));
        assert!(modal.shows_footer());
        assert_eq!(modal.confirm_text(), "确认");
    }

    #[tokio::test(start_paused = true)]
    async fn info_and_fullscreen_sizes() {
        let modals = service("en-US");
        let info = modals.info("details", ModalOptions::new().mask_closable(false));
        let full = modals.fullscreen("editor", ModalOptions::new());

        let info = modals.registry().get(&info).unwrap();
        assert_eq!(info.size(), &ModalSize::Md);
        assert!(info.is_closable());
        assert!(!info.is_mask_closable());
        assert_eq!(modals.registry().get(&full).unwrap().size(), &ModalSize::Full);
    }

    #[tokio::test(start_paused = true)]
    async fn delegates_reach_the_registry() {
        let modals = service("en-US");
        let id = modals.open("form", ModalOptions::new());
        modals.set_loading(&id, true);
        let mut partial = Props::new();
        partial.insert("step".into(), json!(2));
        modals.update_props(&id, partial);

        let modal = modals.registry().get(&id).unwrap();
        assert!(modal.is_loading());
        assert_eq!(modal.props()["step"], json!(2));

        modals.close_all();
        tokio::time::sleep(std::time::Duration::from_millis(301)).await;
        assert!(modals.registry().is_empty());
    }
}
