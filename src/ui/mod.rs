// SPDX-License-Identifier: MPL-2.0
//! Presentation state consumed by portal renderers.
//!
//! Nothing here draws anything. Renderers subscribe to snapshots and call
//! back into the registries.
//!
//! # Overlays
//!
//! - [`notifications`] - Toast registry and the `MessageService` facade
//! - [`modal`] - Modal stack and the `ModalService` facade
//! - [`overlay`] - Id sequences and keyed delayed actions shared by both
//!
//! # Chrome
//!
//! - [`theming`] - Persisted light/dark theme
//! - [`menu`] - Side navigation entries

pub mod menu;
pub mod modal;
pub mod notifications;
pub mod overlay;
pub mod theming;
