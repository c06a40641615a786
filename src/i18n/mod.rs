// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portal.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale resolution, translation loading and locale-aware
//! formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI, stored choice, config or system settings
//! - Embedded `.ftl` translation files (`zh-CN`, `en-US`)
//! - Runtime language switching, persisted under the `locale` storage key
//! - Number, date and relative time formatting

pub mod fluent;
mod format;

pub use fluent::I18n;
