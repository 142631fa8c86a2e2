// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive mode controller: desktop/mobile switching with a debounced resize.
//!
//! Mode is `width > breakpoint ? Desktop : Mobile`. On every transition all panels close;
//! recomputing the current mode writes nothing. The mobile menu's own open flag survives
//! transitions, so a user who opened it sees it still open after rotating a phone.

use waypost_tree::Dom;

use crate::announce::Announcer;
use crate::controller::{NavigationController, aria_bool};
use crate::types::{Millis, Mode};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Responsive {
    mode: Mode,
    // Latest width and the time it may be applied.
    pending: Option<(f64, Millis)>,
}

impl Default for Responsive {
    // Placeholder until the controller reads the viewport.
    fn default() -> Self {
        Self::new(Mode::Desktop)
    }
}

impl Responsive {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            pending: None,
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    /// Replace any pending width; the quiet period restarts.
    fn schedule(&mut self, width: f64, due: Millis) {
        self.pending = Some((width, due));
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn take_due(&mut self, now: Millis) -> Option<f64> {
        match self.pending {
            Some((width, due)) if now >= due => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }
}

impl<A: Announcer> NavigationController<A> {
    /// Recompute the mode for `width` immediately, bypassing the debounce.
    ///
    /// Returns whether the mode changed. A change closes every panel.
    pub fn handle_resize<D: Dom>(&mut self, dom: &mut D, width: f64) -> bool {
        self.responsive.cancel();
        let next = Mode::for_width(width, self.config.breakpoint);
        let current = self.responsive.mode();
        if next == current {
            return false;
        }
        log::debug!("navigation mode {current:?} -> {next:?} at width {width}");
        self.responsive.mode = next;
        self.apply_mode(dom);
        self.close_all(dom);
        true
    }

    pub(crate) fn schedule_resize<D: Dom>(&mut self, dom: &mut D, width: f64, now: Millis) {
        if self.config.resize_debounce_ms == 0 {
            self.handle_resize(dom, width);
        } else {
            let due = now.saturating_add(self.config.resize_debounce_ms);
            self.responsive.schedule(width, due);
        }
    }

    /// Write toggle and list visibility for the current mode.
    pub(crate) fn apply_mode<D: Dom>(&mut self, dom: &mut D) {
        let mobile = self.mobile;
        match self.responsive.mode() {
            Mode::Desktop => {
                if let Some(list) = mobile.list {
                    dom.set_attribute(list, "aria-hidden", "false");
                }
                if let Some(toggle) = mobile.toggle {
                    dom.set_attribute(toggle, "hidden", "");
                }
            }
            Mode::Mobile => {
                if let Some(toggle) = mobile.toggle {
                    dom.remove_attribute(toggle, "hidden");
                }
                if let Some(list) = mobile.list {
                    dom.set_attribute(list, "aria-hidden", aria_bool(!mobile.open));
                }
            }
        }
    }
}
