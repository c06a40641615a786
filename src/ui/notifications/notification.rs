// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` entry together with its `ToastKind` and
//! `ToastPosition` vocabularies.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Unique identifier for a toast, increasing with every toast added to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a toast, drives its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen anchor a toast is stacked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    TopCenter,
    BottomCenter,
}

/// Returned when a string names none of the six anchors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown toast position: {0}")]
pub struct UnknownPosition(pub String);

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomRight,
        ToastPosition::TopCenter,
        ToastPosition::BottomCenter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }

    /// Parses an anchor name, substituting the default anchor for anything unknown.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for ToastPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastPosition::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A toast as seen by renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
    pub(crate) position: ToastPosition,
    pub(crate) duration: Duration,
    /// Set once the exit animation has started.
    pub(crate) removing: bool,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    /// How long the toast stays before its exit animation starts.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.removing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_anchor_parses_back() {
        for position in ToastPosition::ALL {
            assert_eq!(position.as_str().parse::<ToastPosition>(), Ok(position));
        }
    }

    #[test]
    fn unknown_anchor_is_rejected_by_from_str() {
        let err = "middle".parse::<ToastPosition>().unwrap_err();
        assert_eq!(err, UnknownPosition("middle".to_string()));
    }

    #[test]
    fn unknown_anchor_falls_back_to_top_right() {
        assert_eq!(ToastPosition::parse_or_default("middle"), ToastPosition::TopRight);
        assert_eq!(ToastPosition::parse_or_default(""), ToastPosition::TopRight);
        assert_eq!(
            ToastPosition::parse_or_default("bottom-center"),
            ToastPosition::BottomCenter
        );
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Error.to_string(), "error");
    }
}
