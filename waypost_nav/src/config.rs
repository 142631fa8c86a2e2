// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::string::{String, ToString};

use crate::types::Millis;

/// CSS classes written for the stylesheet to key off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Added to a dropdown's item element while its panel is open.
    pub dropdown_open: String,
    /// Added to a submenu's item element while its panel is open.
    pub submenu_open: String,
    /// Added to the menu list while the mobile menu is open.
    pub mobile_open: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            dropdown_open: "dropdown-open".to_string(),
            submenu_open: "submenu-open".to_string(),
            mobile_open: "mobile-open".to_string(),
        }
    }
}

/// Tunables and markup hooks for a [`NavigationController`](crate::NavigationController).
///
/// ```
/// use waypost_nav::NavConfig;
///
/// let config = NavConfig { open_on_hover: true, ..NavConfig::default() };
/// assert_eq!(config.breakpoint, 768.0);
/// assert_eq!(config.classes.dropdown_open, "dropdown-open");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Widths strictly above this are desktop.
    pub breakpoint: f64,
    /// Quiet period before a resize is applied. Zero applies resizes immediately.
    pub resize_debounce_ms: Millis,
    /// How long an announcement stays in the live region.
    pub announce_clear_ms: Millis,
    /// Selector for the menu list, used when the mobile toggle does not name it.
    pub menu_selector: String,
    /// Selector for the mobile toggle button, searched inside the root.
    pub mobile_toggle_selector: String,
    /// `id` of the live-region element used by [`LiveRegion::from_config`](crate::LiveRegion::from_config).
    pub live_region_id: String,
    /// Classes written on open/close.
    pub classes: ClassNames,
    /// Open panels on pointer hover in desktop mode.
    pub open_on_hover: bool,
    /// Shift panels that would overflow the viewport.
    pub nudge_overflow: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            resize_debounce_ms: 150,
            announce_clear_ms: 1000,
            menu_selector: ".nav-menu".to_string(),
            mobile_toggle_selector: ".mobile-menu-toggle".to_string(),
            live_region_id: "nav-announcer".to_string(),
            classes: ClassNames::default(),
            open_on_hover: false,
            nudge_overflow: true,
        }
    }
}
