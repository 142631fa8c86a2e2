// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Nav: accessible interaction state for responsive site navigation.
//!
//! ## Overview
//!
//! A [`NavigationController`] binds to one navigation root and owns everything interactive
//! about it:
//!
//! - disclosure of dropdowns and nested submenus, with at most one top-level dropdown open;
//! - keyboard traversal in the menu bar and inside panels, with wrap-around;
//! - desktop/mobile mode switching at a width breakpoint, with a debounced resize;
//! - screen-reader announcements through an [`Announcer`] such as [`LiveRegion`];
//! - optional hover intent and viewport overflow nudges.
//!
//! The controller never touches a real browser. It talks to the page through
//! [`waypost_tree::Dom`], takes events as [`NavEvent`] values, and receives time as plain
//! [`Millis`] timestamps. Given the same markup and the same event sequence it always writes
//! the same attributes, which makes it testable against [`waypost_tree::Document`].
//!
//! ## Workflow
//!
//! 1) Build the controller with [`NavigationController::new`].
//! 2) Subscribe to [`NavigationController::listeners`] and forward each event to
//!    [`NavigationController::handle_event`].
//! 3) When it returns [`Outcome::Handled`], suppress the browser's default action.
//! 4) Call [`NavigationController::tick`] from a timer.
//! 5) After the markup changes, call [`NavigationController::refresh`]; when the page goes
//!    away, call [`NavigationController::destroy`] and unsubscribe what it returns.
//!
//! ```
//! use kurbo::Size;
//! use waypost_nav::{Key, LiveRegion, Mode, NavConfig, NavEvent, NavigationController, Outcome};
//! use waypost_tree::{Document, Dom};
//!
//! let mut doc = Document::new(Size::new(1280.0, 800.0));
//! let body = doc.body();
//! let region = doc.append(body, "div", &[("id", "nav-announcer"), ("aria-live", "polite")]);
//! let nav = doc.append(body, "nav", &[("id", "main-nav")]);
//! let toggle = doc.append(
//!     nav,
//!     "button",
//!     &[("class", "mobile-menu-toggle"), ("aria-controls", "menu"), ("aria-expanded", "false")],
//! );
//! let list = doc.append(nav, "ul", &[("id", "menu"), ("class", "nav-menu")]);
//! let li = doc.append(list, "li", &[]);
//! let about = doc.append(li, "a", &[("href", "/about")]);
//! doc.append_text(about, "About");
//!
//! let config = NavConfig::default();
//! let live = LiveRegion::from_config(&doc, &config);
//! let mut nav = NavigationController::new(&mut doc, "#main-nav", config, live).unwrap();
//! assert_eq!(nav.mode(), Mode::Desktop);
//! assert_eq!(doc.attribute(toggle, "hidden").as_deref(), Some(""));
//!
//! // Shrinking the window only takes effect once the quiet period has passed.
//! doc.set_viewport(Size::new(375.0, 800.0));
//! nav.handle_event(&mut doc, &NavEvent::Resize { width: 375.0 }, 0);
//! nav.tick(&mut doc, 100);
//! assert_eq!(nav.mode(), Mode::Desktop);
//! nav.tick(&mut doc, 150);
//! assert_eq!(nav.mode(), Mode::Mobile);
//! assert_eq!(doc.attribute(toggle, "hidden"), None);
//! assert_eq!(doc.attribute(list, "aria-hidden").as_deref(), Some("true"));
//!
//! let outcome = nav.handle_event(&mut doc, &NavEvent::Click { target: toggle }, 200);
//! assert_eq!(outcome, Outcome::Handled);
//! assert_eq!(doc.text_content(region), "Navigation menu opened");
//!
//! doc.focus(about);
//! nav.handle_event(&mut doc, &NavEvent::KeyDown { target: about, key: Key::Escape }, 300);
//! assert!(!nav.is_mobile_menu_open());
//! assert_eq!(doc.active_element(), Some(toggle));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` in dependencies.
//! - `libm`: no_std float support for `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`NavConfig`] and [`ClassNames`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod announce;
mod config;
mod controller;
mod disclosure;
mod error;
pub mod hover;
pub mod overflow;
mod responsive;
pub mod traversal;
mod types;


pub use announce::{Announcer, LiveRegion};
pub use config::{ClassNames, NavConfig};
pub use controller::NavigationController;
pub use error::NavError;
pub use types::{FocusContext, Key, Listeners, Millis, Mode, NavEvent, Outcome};
