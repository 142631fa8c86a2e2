// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypost Tree: the DOM seam and the menu arena for navigation widgets.
//!
//! ## Overview
//!
//! Navigation markup is scanned once into a [`MenuTree`]: an arena of [`MenuNode`]s
//! indexed by [`MenuId`], each recording its kind (leaf, dropdown, submenu), label,
//! parent, ordered children, and the elements it is made of (item, control, panel).
//! Traversal and disclosure logic then works over this structure instead of
//! re-walking the document on every key press.
//!
//! The document itself sits behind the object-safe [`Dom`] trait. A browser host
//! implements it over `web-sys`; [`Document`] implements it in memory for tests and
//! demos, and counts every write so "no mutation" properties can be asserted.
//!
//! ## API overview
//!
//! - [`Dom`]: read/write surface (attributes, classes, inline style, focus, geometry).
//! - [`Document`]: in-memory [`Dom`] with generational [`ElementId`] slots.
//! - [`Selector`]: `#id`, `.class`, `tag`, `[attr]`, `[attr="value"]`.
//! - [`MenuTree::scan`] → [`MenuTree`]; see its docs for the markup contract.
//! - [`MenuFlags`]: `HAS_POPUP`, `INERT` (trigger whose panel is missing).
//!
//! ### Minimal usage
//!
//! ```
//! use kurbo::Size;
//! use waypost_tree::{Document, Dom, MenuKind, MenuTree, Selector};
//!
//! let mut doc = Document::new(Size::new(1280.0, 800.0));
//! let body = doc.body();
//! let nav = doc.append(body, "nav", &[("id", "main-nav")]);
//! let list = doc.append(nav, "ul", &[("class", "nav-menu")]);
//! let li = doc.append(list, "li", &[]);
//! let trigger = doc.append(
//!     li,
//!     "button",
//!     &[("aria-haspopup", "true"), ("aria-controls", "services")],
//! );
//! doc.append_text(trigger, "Services");
//! let panel = doc.append(li, "ul", &[("id", "services"), ("aria-hidden", "true")]);
//! let item = doc.append(panel, "li", &[]);
//! let link = doc.append(item, "a", &[("href", "/web")]);
//! doc.append_text(link, "Web Design");
//!
//! let found = doc.query_selector(body, &Selector::parse(".nav-menu").unwrap());
//! assert_eq!(found, Some(list));
//!
//! let tree = MenuTree::scan(&doc, list);
//! let services = tree.by_control(trigger).unwrap();
//! assert_eq!(tree.get(services).unwrap().kind(), MenuKind::Dropdown);
//! assert_eq!(tree.get(services).unwrap().children().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod dom;
mod selector;
mod tree;
mod types;

pub use document::Document;
pub use dom::Dom;
pub use selector::Selector;
pub use tree::{MenuNode, MenuTree};
pub use types::{ElementId, MenuFlags, MenuId, MenuKind};
