// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure manager: open/closed state of dropdowns and submenus.
//!
//! ## Invariants
//!
//! - At most one top-level dropdown is open. Opening one first collapses the others,
//!   including every submenu beneath them.
//! - A submenu is only open while all of its ancestors are open. Opening a submenu opens
//!   its ancestors; closing a panel closes its open descendants.
//! - [`open`](NavigationController::open) and [`close`](NavigationController::close) are
//!   idempotent: already being in the target state means no writes and no announcement.
//! - A trigger whose panel is missing is inert: every operation on it is a logged no-op.

use alloc::format;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use waypost_tree::{Dom, MenuId, MenuKind, MenuNode};

use crate::announce::Announcer;
use crate::controller::{NavigationController, aria_bool};
use crate::error::NavError;
use crate::overflow::{self, Nudge, overflow_nudge};
use crate::types::{Millis, Mode};

/// Per-node open flags and applied nudges, indexed by [`MenuId`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Disclosure {
    open: Vec<bool>,
    nudges: Vec<Nudge>,
}

impl Disclosure {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            open: vec![false; len],
            nudges: vec![Nudge::None; len],
        }
    }

    pub(crate) fn is_open(&self, id: MenuId) -> bool {
        self.open.get(id.index()).copied().unwrap_or(false)
    }

    fn any_open(&self) -> bool {
        self.open.iter().any(|o| *o)
    }

    fn set(&mut self, id: MenuId, open: bool) {
        if let Some(slot) = self.open.get_mut(id.index()) {
            *slot = open;
        }
    }

    fn set_nudge(&mut self, id: MenuId, nudge: Nudge) {
        if let Some(slot) = self.nudges.get_mut(id.index()) {
            *slot = nudge;
        }
    }

    fn take_nudge(&mut self, id: MenuId) -> Nudge {
        self.nudges
            .get_mut(id.index())
            .map(core::mem::take)
            .unwrap_or_default()
    }
}

impl<A: Announcer> NavigationController<A> {
    /// Flip `id`'s panel at time `now`. Returns whether anything changed.
    pub fn toggle<D: Dom>(&mut self, dom: &mut D, id: MenuId, now: Millis) -> bool {
        if self.disclosure.is_open(id) {
            self.close(dom, id, now)
        } else {
            self.open(dom, id, now)
        }
    }

    /// Open `id`'s panel and announce it at time `now`. No-op if already open.
    pub fn open<D: Dom>(&mut self, dom: &mut D, id: MenuId, now: Millis) -> bool {
        self.advance_clock(now);
        let Some(label) = self.live_popup(id).map(|n| n.label().to_string()) else {
            return false;
        };
        if self.disclosure.is_open(id) {
            return false;
        }
        self.reveal(dom, id);
        self.announce(dom, &format!("{label} menu opened"));
        true
    }

    /// Close `id`'s panel, announce it at time `now`, and focus its trigger.
    /// No-op if already closed.
    pub fn close<D: Dom>(&mut self, dom: &mut D, id: MenuId, now: Millis) -> bool {
        self.advance_clock(now);
        let Some((label, control)) = self
            .live_popup(id)
            .map(|n| (n.label().to_string(), n.control()))
        else {
            return false;
        };
        if !self.disclosure.is_open(id) {
            return false;
        }
        self.collapse(dom, id);
        self.announce(dom, &format!("{label} menu closed"));
        dom.focus(control);
        true
    }

    /// Close every dropdown and submenu without announcing or moving focus.
    ///
    /// Every panel's attributes are rewritten, open or not. Returns whether anything was open.
    pub fn close_all<D: Dom>(&mut self, dom: &mut D) -> bool {
        let was_open = self.disclosure.any_open();
        let ids: Vec<MenuId> = self.tree.popups().map(MenuNode::id).collect();
        // Children before parents.
        for id in ids.into_iter().rev() {
            self.write_state(dom, id, false);
        }
        self.hover.reset();
        was_open
    }

    /// Alias of [`close_all`](Self::close_all) for page-level collaborators.
    pub fn close_all_dropdowns<D: Dom>(&mut self, dom: &mut D) {
        self.close_all(dom);
    }

    // --- internals ---

    /// Open `id` and any closed ancestors quietly, collapsing competing dropdowns.
    pub(crate) fn reveal<D: Dom>(&mut self, dom: &mut D, id: MenuId) {
        if self.live_popup(id).is_none() {
            return;
        }
        let path = self.tree.path_to_root(id);
        if let Some(&top) = path.first() {
            let rivals: Vec<MenuId> = self
                .tree
                .bar()
                .iter()
                .copied()
                .filter(|b| *b != top && self.disclosure.is_open(*b))
                .collect();
            for rival in rivals {
                self.collapse(dom, rival);
            }
        }
        for step in path {
            let live = self.tree.get(step).is_some_and(MenuNode::is_live_popup);
            if live && !self.disclosure.is_open(step) {
                self.write_state(dom, step, true);
            }
        }
    }

    /// Close `id` and its open descendants quietly.
    pub(crate) fn collapse<D: Dom>(&mut self, dom: &mut D, id: MenuId) {
        if !self.disclosure.is_open(id) {
            return;
        }
        for d in self.tree.descendants(id).into_iter().rev() {
            if self.disclosure.is_open(d) {
                self.write_state(dom, d, false);
            }
        }
        self.write_state(dom, id, false);
    }

    fn live_popup(&self, id: MenuId) -> Option<&MenuNode> {
        let node = self.tree.get(id)?;
        if node.is_live_popup() {
            return Some(node);
        }
        if node.kind().is_popup() {
            log::warn!(
                "{}",
                NavError::MissingPanel {
                    label: node.label().to_string()
                }
            );
        }
        None
    }

    fn write_state<D: Dom>(&mut self, dom: &mut D, id: MenuId, open: bool) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let Some(panel) = node.panel() else {
            return;
        };
        let (control, item, kind) = (node.control(), node.item(), node.kind());
        self.disclosure.set(id, open);
        dom.set_attribute(control, "aria-expanded", aria_bool(open));
        dom.set_attribute(panel, "aria-hidden", aria_bool(!open));
        let class = match kind {
            MenuKind::Submenu => &self.config.classes.submenu_open,
            _ => &self.config.classes.dropdown_open,
        };
        dom.set_class(item, class, open);

        if !open {
            if self.disclosure.take_nudge(id) != Nudge::None {
                overflow::clear(dom, panel);
            }
            return;
        }
        if !self.config.nudge_overflow || self.responsive.mode() != Mode::Desktop {
            return;
        }
        if let Some(rect) = dom.bounding_rect(panel) {
            let nudge = overflow_nudge(rect, dom.viewport());
            overflow::apply(dom, panel, kind, nudge);
            self.disclosure.set_nudge(id, nudge);
        }
    }
}
