// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport overflow nudges for open panels.

use kurbo::{Rect, Size};
use waypost_tree::{Dom, ElementId, MenuKind};

/// How an open panel was shifted to stay inside the viewport.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Nudge {
    /// The panel fits.
    #[default]
    None,
    /// The panel ran past the right edge and is anchored to the right instead.
    AlignRight,
    /// The panel ran past the left edge and is anchored to the left instead.
    AlignLeft,
}

/// Decide the nudge for a panel laid out at `panel` within `viewport`.
///
/// ```
/// use kurbo::{Rect, Size};
/// use waypost_nav::overflow::{overflow_nudge, Nudge};
///
/// let viewport = Size::new(1024.0, 768.0);
/// assert_eq!(overflow_nudge(Rect::new(100.0, 40.0, 300.0, 200.0), viewport), Nudge::None);
/// assert_eq!(overflow_nudge(Rect::new(900.0, 40.0, 1100.0, 200.0), viewport), Nudge::AlignRight);
/// assert_eq!(overflow_nudge(Rect::new(-20.0, 40.0, 180.0, 200.0), viewport), Nudge::AlignLeft);
/// ```
pub fn overflow_nudge(panel: Rect, viewport: Size) -> Nudge {
    if panel.x1 > viewport.width {
        Nudge::AlignRight
    } else if panel.x0 < 0.0 {
        Nudge::AlignLeft
    } else {
        Nudge::None
    }
}

/// Write the inline `left`/`right` pair for `nudge`.
///
/// Dropdowns hang below their trigger and are pinned to an edge of it; submenus hang beside
/// their trigger and flip to the opposite side.
pub(crate) fn apply<D: Dom + ?Sized>(dom: &mut D, panel: ElementId, kind: MenuKind, nudge: Nudge) {
    let (left, right) = match (nudge, kind) {
        (Nudge::None, _) => return,
        (Nudge::AlignRight, MenuKind::Submenu) => ("auto", "100%"),
        (Nudge::AlignRight, _) => ("auto", "0"),
        (Nudge::AlignLeft, MenuKind::Submenu) => ("100%", "auto"),
        (Nudge::AlignLeft, _) => ("0", "auto"),
    };
    dom.set_style(panel, "left", Some(left));
    dom.set_style(panel, "right", Some(right));
}

/// Remove a previously applied nudge.
pub(crate) fn clear<D: Dom + ?Sized>(dom: &mut D, panel: ElementId) {
    dom.set_style(panel, "left", None);
    dom.set_style(panel, "right", None);
}
