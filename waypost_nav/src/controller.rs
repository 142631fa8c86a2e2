// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation controller: construction, event dispatch, and lifecycle.
//!
//! Disclosure operations, key handling, and mode switching live in their own modules as
//! further `impl` blocks on [`NavigationController`].

use alloc::string::{String, ToString};

use waypost_tree::{Dom, ElementId, MenuId, MenuTree, Selector};

use crate::announce::Announcer;
use crate::config::NavConfig;
use crate::disclosure::Disclosure;
use crate::error::NavError;
use crate::hover::{HoverEvent, HoverState};
use crate::responsive::Responsive;
use crate::types::{Listeners, Millis, Mode, NavEvent, Outcome};

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct MobileMenu {
    pub(crate) toggle: Option<ElementId>,
    pub(crate) list: Option<ElementId>,
    pub(crate) open: bool,
}

/// Interaction state machine for one navigation root.
///
/// ## Usage
///
/// - Construct with [`NavigationController::new`] once the markup is in the document.
/// - Subscribe to the events in [`NavigationController::listeners`] and forward each one to
///   [`NavigationController::handle_event`] with the event's timestamp; call
///   `preventDefault` when it returns [`Outcome::Handled`].
/// - Call [`NavigationController::tick`] from a timer so debounced resizes and announcement
///   clearing happen.
/// - Hand the controller to anything that needs [`NavigationController::close_all_dropdowns`];
///   there is no global instance.
///
/// Exactly one controller should own a given root.
///
/// ```
/// use kurbo::Size;
/// use waypost_nav::{Key, NavConfig, NavEvent, NavigationController};
/// use waypost_tree::{Document, Dom};
///
/// let mut doc = Document::new(Size::new(1024.0, 768.0));
/// let body = doc.body();
/// let nav = doc.append(body, "nav", &[("id", "main-nav")]);
/// let list = doc.append(nav, "ul", &[("class", "nav-menu")]);
/// let li = doc.append(list, "li", &[]);
/// let trigger = doc.append(
///     li,
///     "button",
///     &[("aria-haspopup", "true"), ("aria-controls", "services"), ("aria-expanded", "false")],
/// );
/// doc.append_text(trigger, "Services");
/// let panel = doc.append(li, "ul", &[("id", "services"), ("aria-hidden", "true")]);
/// let item = doc.append(panel, "li", &[]);
/// let web = doc.append(item, "a", &[("href", "/web")]);
///
/// let mut nav = NavigationController::new(&mut doc, "#main-nav", NavConfig::default(), ()).unwrap();
/// nav.handle_event(&mut doc, &NavEvent::Click { target: trigger }, 0);
/// assert_eq!(doc.attribute(trigger, "aria-expanded").as_deref(), Some("true"));
/// assert_eq!(doc.attribute(panel, "aria-hidden").as_deref(), Some("false"));
///
/// doc.focus(trigger);
/// nav.handle_event(&mut doc, &NavEvent::KeyDown { target: trigger, key: Key::ArrowDown }, 10);
/// assert_eq!(doc.active_element(), Some(web));
/// ```
pub struct NavigationController<A: Announcer = ()> {
    pub(crate) config: NavConfig,
    pub(crate) root_selector: String,
    pub(crate) root: ElementId,
    pub(crate) tree: MenuTree,
    pub(crate) disclosure: Disclosure,
    pub(crate) responsive: Responsive,
    pub(crate) mobile: MobileMenu,
    pub(crate) hover: HoverState,
    pub(crate) announcer: A,
    pub(crate) clock: Millis,
}

impl<A: Announcer> core::fmt::Debug for NavigationController<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationController")
            .field("root", &self.root)
            .field("nodes", &self.tree.len())
            .field("mode", &self.responsive.mode())
            .field("mobile_open", &self.mobile.open)
            .finish_non_exhaustive()
    }
}

impl<A: Announcer> NavigationController<A> {
    /// Bind a controller to the element matching `root_selector`.
    ///
    /// Missing optional pieces (mobile toggle, menu list, live region) never fail; with no
    /// menu items the controller is an inert shell. Every panel is synchronized to closed.
    pub fn new<D: Dom>(
        dom: &mut D,
        root_selector: &str,
        config: NavConfig,
        announcer: A,
    ) -> Result<Self, NavError> {
        let root = resolve_root(&*dom, root_selector)?;
        let mut nav = Self {
            config,
            root_selector: root_selector.to_string(),
            root,
            tree: MenuTree::empty(),
            disclosure: Disclosure::default(),
            responsive: Responsive::default(),
            mobile: MobileMenu::default(),
            hover: HoverState::new(),
            announcer,
            clock: 0,
        };
        nav.initialize(dom);
        Ok(nav)
    }

    /// Tear down and rescan the markup under the (re-resolved) root.
    ///
    /// If the root is gone the controller is left as an inert shell and the error is returned.
    pub fn refresh<D: Dom>(&mut self, dom: &mut D) -> Result<(), NavError> {
        self.teardown(dom);
        self.root = resolve_root(&*dom, &self.root_selector)?;
        self.initialize(dom);
        Ok(())
    }

    /// Close everything, drop all state, and return the subscriptions to remove.
    pub fn destroy<D: Dom>(mut self, dom: &mut D) -> Listeners {
        let listeners = self.listeners();
        self.teardown(dom);
        listeners
    }

    /// The events this controller needs the host to forward.
    pub fn listeners(&self) -> Listeners {
        let mut l = Listeners::WINDOW_RESIZE | Listeners::DOCUMENT_VISIBILITY;
        if !self.tree.is_empty() || self.mobile.toggle.is_some() {
            l |= Listeners::DOCUMENT_CLICK | Listeners::ROOT_KEYDOWN | Listeners::ROOT_FOCUSOUT;
        }
        if self.config.open_on_hover && !self.tree.is_empty() {
            l |= Listeners::ROOT_POINTERMOVE;
        }
        l
    }

    /// Route one input event.
    pub fn handle_event<D: Dom>(&mut self, dom: &mut D, event: &NavEvent, now: Millis) -> Outcome {
        self.advance_clock(now);
        match *event {
            NavEvent::Click { target } => self.handle_click(dom, target),
            NavEvent::KeyDown { target, key } => self.handle_key(dom, target, key),
            NavEvent::FocusOut { related, .. } => {
                if !related.is_some_and(|r| dom.contains(self.root, r)) {
                    self.close_all(dom);
                }
                Outcome::Ignored
            }
            NavEvent::PointerMove { target } => {
                self.handle_hover(dom, target);
                Outcome::Ignored
            }
            NavEvent::Resize { width } => {
                self.schedule_resize(dom, width, now);
                Outcome::Ignored
            }
            NavEvent::VisibilityChange { hidden } => {
                if hidden {
                    self.close_all(dom);
                }
                Outcome::Ignored
            }
        }
    }

    /// Run timers due at `now`: a debounced resize and the announcer's clear.
    pub fn tick<D: Dom>(&mut self, dom: &mut D, now: Millis) {
        self.advance_clock(now);
        if let Some(width) = self.responsive.take_due(now) {
            self.handle_resize(dom, width);
        }
        self.announcer.tick(dom, now);
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The scanned menu.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Active configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Current responsive mode.
    pub fn mode(&self) -> Mode {
        self.responsive.mode()
    }

    /// Whether `id`'s panel is open.
    pub fn is_open(&self, id: MenuId) -> bool {
        self.disclosure.is_open(id)
    }

    /// The open top-level dropdown, if any.
    pub fn open_dropdown(&self) -> Option<MenuId> {
        self.tree
            .bar()
            .iter()
            .copied()
            .find(|id| self.disclosure.is_open(*id))
    }

    /// Whether the mobile menu has been opened by the user.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile.open
    }

    /// The announcer.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// The announcer, mutably.
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Open or close the mobile menu at time `now`. Returns whether anything changed.
    ///
    /// Closing also closes every panel.
    pub fn set_mobile_menu_open<D: Dom>(&mut self, dom: &mut D, open: bool, now: Millis) -> bool {
        self.advance_clock(now);
        if self.mobile.open == open {
            return false;
        }
        self.mobile.open = open;
        if let Some(toggle) = self.mobile.toggle {
            dom.set_attribute(toggle, "aria-expanded", aria_bool(open));
        }
        if let Some(list) = self.mobile.list {
            dom.set_class(list, &self.config.classes.mobile_open, open);
            if self.responsive.mode() == Mode::Mobile {
                dom.set_attribute(list, "aria-hidden", aria_bool(!open));
            }
        }
        if !open {
            self.close_all(dom);
        }
        let message = if open {
            "Navigation menu opened"
        } else {
            "Navigation menu closed"
        };
        self.announce(dom, message);
        true
    }

    // --- internals ---

    /// Announcement deadlines are computed from this clock; it never runs backwards.
    pub(crate) fn advance_clock(&mut self, now: Millis) {
        self.clock = self.clock.max(now);
    }

    pub(crate) fn announce<D: Dom>(&mut self, dom: &mut D, message: &str) {
        self.announcer.announce(dom, message, self.clock);
    }

    fn initialize<D: Dom>(&mut self, dom: &mut D) {
        let toggle = Selector::parse(&self.config.mobile_toggle_selector)
            .and_then(|s| dom.query_selector(self.root, &s));
        let list = toggle
            .and_then(|t| dom.attribute(t, "aria-controls"))
            .and_then(|id| dom.element_by_id(&id))
            .or_else(|| {
                Selector::parse(&self.config.menu_selector)
                    .and_then(|s| dom.query_selector(self.root, &s))
            });
        self.tree = match list {
            Some(list) => MenuTree::scan(&*dom, list),
            None => {
                log::debug!(
                    "navigation root `{}` has no menu list; controller is inert",
                    self.root_selector
                );
                MenuTree::empty()
            }
        };
        self.disclosure = Disclosure::with_len(self.tree.len());
        self.mobile = MobileMenu {
            toggle,
            list,
            open: toggle
                .and_then(|t| dom.attribute(t, "aria-expanded"))
                .as_deref()
                == Some("true"),
        };
        self.hover.reset();
        self.responsive = Responsive::new(Mode::for_width(
            dom.viewport().width,
            self.config.breakpoint,
        ));
        self.apply_mode(dom);
        self.close_all(dom);
    }

    fn teardown<D: Dom>(&mut self, dom: &mut D) {
        self.close_all(dom);
        self.responsive.cancel();
        self.hover.reset();
        self.tree = MenuTree::empty();
        self.disclosure = Disclosure::default();
        self.mobile = MobileMenu::default();
    }

    fn handle_click<D: Dom>(&mut self, dom: &mut D, target: ElementId) -> Outcome {
        if !dom.contains(self.root, target) {
            self.close_all(dom);
            return Outcome::Ignored;
        }
        if self.mobile.toggle.is_some_and(|t| dom.contains(t, target)) {
            if self.responsive.mode() != Mode::Mobile {
                return Outcome::Ignored;
            }
            let open = !self.mobile.open;
            return Outcome::from_bool(self.set_mobile_menu_open(dom, open, self.clock));
        }
        let Some(id) = self.control_at(&*dom, target) else {
            return Outcome::Ignored;
        };
        if !self.tree.get(id).is_some_and(|n| n.kind().is_popup()) {
            return Outcome::Ignored;
        }
        Outcome::from_bool(self.toggle(dom, id, self.clock))
    }

    fn handle_hover<D: Dom>(&mut self, dom: &mut D, target: Option<ElementId>) {
        if !self.config.open_on_hover || self.responsive.mode() != Mode::Desktop {
            return;
        }
        let target = target.filter(|t| dom.contains(self.root, *t));
        for event in self.hover.update(&self.tree, &*dom, target) {
            match event {
                HoverEvent::Leave(id) => self.collapse(dom, id),
                HoverEvent::Enter(id) => self.reveal(dom, id),
            }
        }
    }

    /// The menu node whose control is `target` or one of its ancestors.
    fn control_at<D: Dom>(&self, dom: &D, target: ElementId) -> Option<MenuId> {
        let mut cur = Some(target);
        while let Some(c) = cur {
            if let Some(id) = self.tree.by_control(c) {
                return Some(id);
            }
            if c == self.root {
                break;
            }
            cur = dom.parent(c);
        }
        None
    }
}

pub(crate) fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn resolve_root<D: Dom + ?Sized>(dom: &D, selector: &str) -> Result<ElementId, NavError> {
    let parsed =
        Selector::parse(selector).ok_or_else(|| NavError::InvalidSelector(selector.to_string()))?;
    dom.document_element()
        .and_then(|doc| dom.query_selector(doc, &parsed))
        .ok_or_else(|| NavError::RootNotFound(selector.to_string()))
}
