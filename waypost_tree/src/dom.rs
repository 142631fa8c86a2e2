// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM seam.
//!
//! ## Overview
//!
//! [`Dom`] is the narrow surface the navigation core reads markup through and writes
//! attribute, class, style, and focus changes to.
//! [`Document`](crate::Document) implements it in memory; a browser host implements it over
//! `web-sys` and keeps a side table from [`ElementId`] to live nodes.
//!
//! The trait is object safe so collaborators (for example an announcer) can take
//! `&mut dyn Dom`.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::selector::Selector;
use crate::types::ElementId;

/// Read/write access to a document.
///
/// Lookups on stale or unknown ids return `None`/`false`/empty; writes to them are ignored.
pub trait Dom {
    /// The top-level element of the document.
    fn document_element(&self) -> Option<ElementId>;
    /// Resolve an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    /// Parent of `el`, or `None` for the document element.
    fn parent(&self, el: ElementId) -> Option<ElementId>;
    /// Child elements of `el` in document order.
    fn children(&self, el: ElementId) -> Vec<ElementId>;
    /// Lowercase tag name.
    fn tag_name(&self, el: ElementId) -> Option<String>;
    /// Attribute value.
    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;
    /// Whether `el` carries `class`.
    fn has_class(&self, el: ElementId, class: &str) -> bool;
    /// Concatenated text of `el` and its descendants.
    fn text_content(&self, el: ElementId) -> String;
    /// Border box in viewport coordinates, if laid out.
    fn bounding_rect(&self, el: ElementId) -> Option<Rect>;
    /// Current viewport size in CSS pixels.
    fn viewport(&self) -> Size;
    /// The element that currently has keyboard focus.
    fn active_element(&self) -> Option<ElementId>;

    /// Set an attribute.
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);
    /// Remove an attribute.
    fn remove_attribute(&mut self, el: ElementId, name: &str);
    /// Add (`on = true`) or remove a class.
    fn set_class(&mut self, el: ElementId, class: &str, on: bool);
    /// Set (`Some`) or clear (`None`) an inline style property.
    fn set_style(&mut self, el: ElementId, property: &str, value: Option<&str>);
    /// Replace the text content of `el`.
    fn set_text_content(&mut self, el: ElementId, text: &str);
    /// Move keyboard focus to `el`.
    fn focus(&mut self, el: ElementId);

    /// Whether `el` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, el: ElementId) -> bool {
        let mut cur = Some(el);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent(c);
        }
        false
    }

    /// Whether `el` can take keyboard focus.
    ///
    /// Links with an `href`, buttons, and anything with a non-negative `tabindex` qualify.
    fn is_focusable(&self, el: ElementId) -> bool {
        if let Some(tabindex) = self.attribute(el, "tabindex") {
            return !tabindex.trim_start().starts_with('-');
        }
        match self.tag_name(el).as_deref() {
            Some("a") => self.attribute(el, "href").is_some(),
            Some("button" | "input" | "select" | "textarea") => true,
            _ => false,
        }
    }

    /// First element matching `selector` in `scope` (inclusive) in document order.
    fn query_selector(&self, scope: ElementId, selector: &Selector) -> Option<ElementId> {
        let mut stack = alloc::vec![scope];
        while let Some(el) = stack.pop() {
            if selector.matches(self, el) {
                return Some(el);
            }
            let mut kids = self.children(el);
            kids.reverse();
            stack.extend(kids);
        }
        None
    }

    /// First focusable element in `scope` (inclusive) in document order.
    fn first_focusable(&self, scope: ElementId) -> Option<ElementId> {
        let mut stack = alloc::vec![scope];
        while let Some(el) = stack.pop() {
            if self.is_focusable(el) {
                return Some(el);
            }
            let mut kids = self.children(el);
            kids.reverse();
            stack.extend(kids);
        }
        None
    }
}
