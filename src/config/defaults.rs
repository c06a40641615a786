// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the portal. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Toast durations and the exit animation grace window
//! - **API**: Backend address and request timeout
//! - **Locale**: Fallback language

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Auto-dismiss delay used by the toast registry when the caller gives none.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Auto-dismiss delay used by the message facade wrappers.
pub const MESSAGE_TOAST_DURATION_MS: u64 = 3000;

/// Delay between a logical removal and the physical deletion of an entry.
/// Matches the exit animation length of the renderers.
pub const REMOVAL_GRACE_MS: u64 = 300;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Address of the Brook web API when none is configured.
pub const DEFAULT_BASE_API: &str = "http://127.0.0.1:8000";

/// Default request timeout (in milliseconds).
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 6000;

/// Minimum accepted request timeout (in milliseconds).
pub const MIN_REQUEST_TIMEOUT_MS: u64 = 500;

/// Maximum accepted request timeout (in milliseconds).
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Language used when neither the CLI, storage, config nor the OS pick one.
pub const DEFAULT_LOCALE: &str = "zh-CN";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MESSAGE_TOAST_DURATION_MS > REMOVAL_GRACE_MS);
    assert!(DEFAULT_TOAST_DURATION_MS > REMOVAL_GRACE_MS);

    assert!(MIN_REQUEST_TIMEOUT_MS > 0);
    assert!(MAX_REQUEST_TIMEOUT_MS >= MIN_REQUEST_TIMEOUT_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_MS >= MIN_REQUEST_TIMEOUT_MS);
    assert!(DEFAULT_REQUEST_TIMEOUT_MS <= MAX_REQUEST_TIMEOUT_MS);
};
