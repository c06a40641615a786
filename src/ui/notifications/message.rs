// SPDX-License-Identifier: MPL-2.0
//! Convenience entry points for showing toasts.

use super::manager::ToastRegistry;
use super::notification::{ToastId, ToastKind, ToastPosition};
use crate::config::MESSAGE_TOAST_DURATION_MS;
use std::time::Duration;

/// Severity-specific shortcuts over a [`ToastRegistry`].
///
/// Every shortcut anchors at the top right and stays for
/// [`MESSAGE_TOAST_DURATION_MS`] unless told otherwise through [`show`](Self::show).
#[derive(Debug, Clone)]
pub struct MessageService {
    toasts: ToastRegistry,
}

impl MessageService {
    #[must_use]
    pub fn new(toasts: ToastRegistry) -> Self {
        Self { toasts }
    }

    /// The registry the shortcuts write to.
    #[must_use]
    pub fn registry(&self) -> &ToastRegistry {
        &self.toasts
    }

    /// Shows a toast of the given kind with optional anchor and duration.
    pub fn show(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        position: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.toasts.add(
            message,
            kind,
            Some(position.unwrap_or(ToastPosition::TopRight.as_str())),
            Some(duration.unwrap_or(Duration::from_millis(MESSAGE_TOAST_DURATION_MS))),
        )
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Success, message, None, None)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Error, message, None, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Warning, message, None, None)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Info, message, None, None)
    }
}
