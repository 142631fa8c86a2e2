// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: time, keys, events, outcomes, modes, and listener sets.
//!
//! ## Overview
//!
//! These types describe what a host feeds into
//! [`NavigationController::handle_event`](crate::NavigationController::handle_event)
//! and what it gets back.

use waypost_tree::ElementId;

/// Milliseconds on a host-chosen monotonic clock (for example `performance.now()`).
pub type Millis = u64;

/// A keyboard key, normalized from a DOM `KeyboardEvent.key` value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// The space bar.
    Space,
    /// `Escape`.
    Escape,
    /// `Tab` (with or without Shift).
    Tab,
    /// Anything else.
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` string, including legacy IE/Edge names.
    ///
    /// ```
    /// use waypost_nav::Key;
    ///
    /// assert_eq!(Key::from_key_name("ArrowDown"), Key::ArrowDown);
    /// assert_eq!(Key::from_key_name("Down"), Key::ArrowDown);
    /// assert_eq!(Key::from_key_name(" "), Key::Space);
    /// assert_eq!(Key::from_key_name("Esc"), Key::Escape);
    /// assert_eq!(Key::from_key_name("q"), Key::Other);
    /// ```
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" | "Space" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// An input event delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// A click anywhere in the document; targets outside the root count as outside clicks.
    Click {
        /// The clicked element.
        target: ElementId,
    },
    /// A key press on the focused element.
    KeyDown {
        /// The element that had focus.
        target: ElementId,
        /// The normalized key.
        key: Key,
    },
    /// Focus left an element inside the root.
    FocusOut {
        /// The element losing focus.
        target: ElementId,
        /// The element gaining focus, if any.
        related: Option<ElementId>,
    },
    /// The pointer moved over `target` (or left the root when `None`).
    PointerMove {
        /// The element under the pointer.
        target: Option<ElementId>,
    },
    /// The window was resized.
    Resize {
        /// New viewport width in CSS pixels.
        width: f64,
    },
    /// The page visibility changed.
    VisibilityChange {
        /// Whether the page is now hidden.
        hidden: bool,
    },
}

/// Whether the controller acted on an event.
///
/// Hosts call `preventDefault` for [`Outcome::Handled`] key presses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The controller did nothing; let the browser's default run.
    Ignored,
    /// The controller consumed the event.
    Handled,
}

impl Outcome {
    pub(crate) fn from_bool(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// Behavioral branch selected by viewport width.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Width above the breakpoint: horizontal bar with dropdowns.
    Desktop,
    /// Width at or below the breakpoint: collapsible list behind a toggle.
    Mobile,
}

impl Mode {
    /// `width > breakpoint ? Desktop : Mobile`.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width > breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// Where keyboard focus sits inside the menu, derived from the menu arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FocusContext {
    /// A top-level item.
    MenuBar,
    /// An item inside a dropdown panel.
    DropdownPanel,
    /// An item inside a nested submenu panel.
    SubmenuPanel,
}

bitflags::bitflags! {
    /// Event subscriptions a host must register for a controller.
    ///
    /// Returned by [`NavigationController::listeners`](crate::NavigationController::listeners)
    /// and again by [`NavigationController::destroy`](crate::NavigationController::destroy) so
    /// the host can remove exactly what it added.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// `keydown` on the root.
        const ROOT_KEYDOWN      = 0b0000_0001;
        /// `focusout` on the root.
        const ROOT_FOCUSOUT     = 0b0000_0010;
        /// `pointermove`/`pointerleave` on the root.
        const ROOT_POINTERMOVE  = 0b0000_0100;
        /// `click` on the document (covers root clicks and outside clicks).
        const DOCUMENT_CLICK    = 0b0000_1000;
        /// `visibilitychange` on the document.
        const DOCUMENT_VISIBILITY = 0b0001_0000;
        /// `resize` on the window.
        const WINDOW_RESIZE     = 0b0010_0000;
    }
}
