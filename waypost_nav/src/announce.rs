// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-reader announcements.
//!
//! The controller only ever calls [`Announcer::announce`]. [`LiveRegion`] is the stock
//! implementation: it writes into an `aria-live` element and clears it after a delay so an
//! identical follow-up message is read again. Each announcement replaces the pending clear
//! deadline, so a stale deadline never wipes a newer message.
//!
//! ```
//! use kurbo::Size;
//! use waypost_nav::{Announcer, LiveRegion};
//! use waypost_tree::{Document, Dom};
//!
//! let mut doc = Document::new(Size::new(1024.0, 768.0));
//! let body = doc.body();
//! let region = doc.append(body, "div", &[("id", "nav-announcer"), ("aria-live", "polite")]);
//!
//! let mut live = LiveRegion::find(&doc, "nav-announcer", 1000).unwrap();
//! live.announce(&mut doc, "Services menu opened", 0);
//! assert_eq!(doc.text_content(region), "Services menu opened");
//!
//! live.tick(&mut doc, 999);
//! assert_eq!(doc.text_content(region), "Services menu opened");
//! live.tick(&mut doc, 1000);
//! assert_eq!(doc.text_content(region), "");
//! ```

use waypost_tree::{Dom, ElementId};

use crate::config::NavConfig;
use crate::types::Millis;

/// A text sink for assistive technology.
pub trait Announcer {
    /// Announce `message` at time `now`.
    fn announce(&mut self, dom: &mut dyn Dom, message: &str, now: Millis);

    /// Run any scheduled work that is due at `now`.
    fn tick(&mut self, _dom: &mut dyn Dom, _now: Millis) {}
}

/// Silence.
impl Announcer for () {
    fn announce(&mut self, _dom: &mut dyn Dom, _message: &str, _now: Millis) {}
}

/// A missing collaborator is skipped.
impl<A: Announcer> Announcer for Option<A> {
    fn announce(&mut self, dom: &mut dyn Dom, message: &str, now: Millis) {
        if let Some(a) = self {
            a.announce(dom, message, now);
        }
    }

    fn tick(&mut self, dom: &mut dyn Dom, now: Millis) {
        if let Some(a) = self {
            a.tick(dom, now);
        }
    }
}

/// Writes announcements into a live-region element and clears them after a delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveRegion {
    element: ElementId,
    clear_after: Millis,
    clear_at: Option<Millis>,
}

impl LiveRegion {
    /// Wrap an existing live-region element.
    pub fn new(element: ElementId, clear_after: Millis) -> Self {
        Self {
            element,
            clear_after,
            clear_at: None,
        }
    }

    /// Look up the live region by `id`; `None` when the page has none.
    pub fn find<D: Dom + ?Sized>(dom: &D, id: &str, clear_after: Millis) -> Option<Self> {
        dom.element_by_id(id).map(|el| Self::new(el, clear_after))
    }

    /// Look up the live region named by [`NavConfig::live_region_id`].
    pub fn from_config<D: Dom + ?Sized>(dom: &D, config: &NavConfig) -> Option<Self> {
        Self::find(dom, &config.live_region_id, config.announce_clear_ms)
    }

    /// The live-region element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// When the current message will be cleared, if one is showing.
    pub fn clear_deadline(&self) -> Option<Millis> {
        self.clear_at
    }
}

impl Announcer for LiveRegion {
    fn announce(&mut self, dom: &mut dyn Dom, message: &str, now: Millis) {
        dom.set_text_content(self.element, message);
        self.clear_at = Some(now.saturating_add(self.clear_after));
    }

    fn tick(&mut self, dom: &mut dyn Dom, now: Millis) {
        if self.clear_at.is_some_and(|at| now >= at) {
            self.clear_at = None;
            dom.set_text_content(self.element, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use waypost_tree::Document;

    fn setup() -> (Document, ElementId) {
        let mut doc = Document::new(Size::new(1024.0, 768.0));
        let body = doc.body();
        let region = doc.append(body, "div", &[("id", "nav-announcer")]);
        (doc, region)
    }

    #[test]
    fn newer_message_is_not_cleared_by_older_deadline() {
        let (mut doc, region) = setup();
        let mut live = LiveRegion::new(region, 1000);
        live.announce(&mut doc, "Services menu opened", 0);
        live.announce(&mut doc, "Services menu closed", 800);
        // The first message's deadline has passed; the second must survive.
        live.tick(&mut doc, 1000);
        assert_eq!(doc.text_content(region), "Services menu closed");
        assert_eq!(live.clear_deadline(), Some(1800));
        live.tick(&mut doc, 1800);
        assert_eq!(doc.text_content(region), "");
        assert_eq!(live.clear_deadline(), None);
    }

    #[test]
    fn tick_without_pending_message_does_not_write() {
        let (mut doc, region) = setup();
        let mut live = LiveRegion::new(region, 1000);
        live.tick(&mut doc, 5000);
        assert_eq!(doc.mutation_count(), 0);
    }

    #[test]
    fn missing_region_is_skipped() {
        let (mut doc, _) = setup();
        let mut live = LiveRegion::find(&doc, "nope", 1000);
        assert!(live.is_none());
        live.announce(&mut doc, "ignored", 0);
        live.tick(&mut doc, 2000);
        assert_eq!(doc.mutation_count(), 0);
    }

    #[test]
    fn from_config_uses_configured_id_and_delay() {
        let (doc, region) = setup();
        let live = LiveRegion::from_config(&doc, &NavConfig::default()).unwrap();
        assert_eq!(live.element(), region);
        assert_eq!(live.clear_after, 1000);
    }
}
