// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to report the outcome of an action (a saved
//! proxy, a failed request) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Toast` entry with its kind and anchor
//! - [`manager`] - `ToastRegistry` holding live toasts and their timers
//! - [`message`] - `MessageService` severity shortcuts
//!
//! # Usage
//!
//! ```ignore
//! use brook_portal::ui::notifications::{MessageService, ToastRegistry};
//!
//! let toasts = ToastRegistry::new();
//! let messages = MessageService::new(toasts.clone());
//! messages.success("Proxy saved");
//!
//! // A renderer follows the live list
//! let mut receiver = toasts.subscribe();
//! ```
//!
//! # Lifecycle
//!
//! created -> visible -> removing -> destroyed. `removing` starts when the
//! duration elapses (or on `remove`), deletion follows 300 ms later.

mod manager;
mod message;
mod notification;

pub use manager::ToastRegistry;
pub use message::MessageService;
pub use notification::{Toast, ToastId, ToastKind, ToastPosition, UnknownPosition};
