// SPDX-License-Identifier: MPL-2.0
//! Stacked modal dialogs.
//!
//! [`ModalRegistry`] holds the stack rendered by a single modal container;
//! [`ModalService`] offers the `confirm`, `info` and `fullscreen` presets.

mod entry;
mod manager;
mod options;
mod service;

pub use entry::{Callback, ConfirmCallback, Modal, ModalContent, ModalSize, Props};
pub use manager::{DismissSource, ModalRegistry};
pub use options::ModalOptions;
pub use service::ModalService;
