// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors surfaced by the navigation controller.
///
/// Only construction and [`refresh`](crate::NavigationController::refresh) return these.
/// Everything that happens inside an event handler degrades to a no-op; [`NavError::MissingPanel`]
/// exists so those no-ops can be logged with a useful message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The root selector could not be parsed.
    #[error("invalid root selector `{0}`")]
    InvalidSelector(String),
    /// No element matched the root selector.
    #[error("navigation root `{0}` not found")]
    RootNotFound(String),
    /// A trigger's `aria-controls` does not resolve to a panel.
    #[error("menu trigger `{label}` references missing panel")]
    MissingPanel {
        /// Label of the inert trigger.
        label: String,
    },
}
