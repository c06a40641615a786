// SPDX-License-Identifier: MPL-2.0
//! `brook_portal` is the client core of the Brook server administration portal.
//!
//! It holds the state a portal front end renders (toasts, modal stack, theme,
//! current route, language) and the typed calls to the server API. Rendering
//! itself is left to the front end, which observes the registries through
//! `tokio::sync::watch` subscriptions.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod request;
pub mod routes;
pub mod service;
pub mod storage;
pub mod ui;
