// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document: structure, attributes, focus, and a write counter.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::dom::Dom;
use crate::types::ElementId;

/// A minimal element tree implementing [`Dom`].
///
/// Used by tests and demos to stand in for a browser document. Every write through
/// the [`Dom`] trait bumps [`Document::mutation_count`], which makes "no DOM mutation"
/// properties checkable. Builder methods ([`Document::append`] and friends) do not count.
pub struct Document {
    nodes: Vec<Option<Element>>, // slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: Option<ElementId>,
    active: Option<ElementId>,
    viewport: Size,
    mutations: u64,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("elements_alive", &alive)
            .field("active", &self.active)
            .field("viewport", &self.viewport)
            .field("mutations", &self.mutations)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    bounds: Option<Rect>,
}

impl Element {
    fn new(generation: u32, tag: &str) -> Self {
        Self {
            generation,
            tag: tag.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            bounds: None,
        }
    }
}

impl Document {
    /// Create a document with a `body` element and the given viewport.
    pub fn new(viewport: Size) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: None,
            active: None,
            viewport,
            mutations: 0,
        };
        doc.root = Some(doc.insert(None, "body"));
        doc
    }

    /// The `body` element.
    pub fn body(&self) -> ElementId {
        self.root.unwrap_or(ElementId::new(0, 1))
    }

    /// Append a child element with the given attributes.
    ///
    /// A `class` attribute is split on whitespace into the class list.
    pub fn append(&mut self, parent: ElementId, tag: &str, attrs: &[(&str, &str)]) -> ElementId {
        let parent = self.is_alive(parent).then_some(parent);
        let id = self.insert(parent, tag);
        if let Some(el) = self.element_mut(id) {
            for (name, value) in attrs {
                if *name == "class" {
                    el.classes = value.split_whitespace().map(ToString::to_string).collect();
                } else {
                    el.attributes.insert(name.to_string(), value.to_string());
                }
            }
        }
        id
    }

    /// Append text to an element's own text.
    pub fn append_text(&mut self, el: ElementId, text: &str) {
        if let Some(e) = self.element_mut(el) {
            e.text.push_str(text);
        }
    }

    /// Record a layout box for an element.
    pub fn set_bounds(&mut self, el: ElementId, bounds: Rect) {
        if let Some(e) = self.element_mut(el) {
            e.bounds = Some(bounds);
        }
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Remove an element and its subtree.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if self.active.is_some_and(|a| self.contains(id, a)) {
            self.active = None;
        }
        if let Some(parent) = self.element(id).and_then(|e| e.parent) {
            if let Some(p) = self.element_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        let children = self.element(id).map(|e| e.children.clone()).unwrap_or_default();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        if self.root == Some(id) {
            self.root = None;
        }
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Inline style value.
    pub fn style(&self, el: ElementId, property: &str) -> Option<&str> {
        self.element(el)?.styles.get(property).map(String::as_str)
    }

    /// Number of writes made through [`Dom`] since creation or the last reset.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Reset the write counter.
    pub fn reset_mutations(&mut self) {
        self.mutations = 0;
    }

    // --- internals ---

    fn insert(&mut self, parent: Option<ElementId>, tag: &str) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Element::new(generation, tag));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Element::new(generation, tag)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        if let Some(p) = parent {
            if let Some(parent_el) = self.element_mut(p) {
                parent_el.children.push(id);
            }
            if let Some(el) = self.element_mut(id) {
                el.parent = Some(p);
            }
        }
        id
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        let e = self.nodes.get(id.idx())?.as_ref()?;
        (e.generation == id.1).then_some(e)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let e = self.nodes.get_mut(id.idx())?.as_mut()?;
        if e.generation != id.1 {
            return None;
        }
        Some(e)
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(e) = self.element(id) else {
            return;
        };
        out.push_str(&e.text);
        for &c in &e.children {
            self.collect_text(c, out);
        }
    }
}

impl Dom for Document {
    fn document_element(&self) -> Option<ElementId> {
        self.root
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        let root = self.root?;
        let mut stack = alloc::vec![root];
        while let Some(el) = stack.pop() {
            let e = self.element(el)?;
            if e.attributes.get("id").is_some_and(|v| v == id) {
                return Some(el);
            }
            stack.extend(e.children.iter().rev().copied());
        }
        None
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.element(el)?.parent
    }

    fn children(&self, el: ElementId) -> Vec<ElementId> {
        self.element(el)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    fn tag_name(&self, el: ElementId) -> Option<String> {
        self.element(el).map(|e| e.tag.clone())
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        let e = self.element(el)?;
        if name == "class" {
            return (!e.classes.is_empty()).then(|| e.classes.join(" "));
        }
        e.attributes.get(name).cloned()
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.element(el)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn text_content(&self, el: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(el, &mut out);
        out
    }

    fn bounding_rect(&self, el: ElementId) -> Option<Rect> {
        self.element(el)?.bounds
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn active_element(&self) -> Option<ElementId> {
        self.active.filter(|a| self.is_alive(*a))
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        let Some(e) = self.element_mut(el) else {
            return;
        };
        if name == "class" {
            e.classes = value.split_whitespace().map(ToString::to_string).collect();
        } else {
            e.attributes.insert(name.to_string(), value.to_string());
        }
        self.mutations += 1;
    }

    fn remove_attribute(&mut self, el: ElementId, name: &str) {
        let Some(e) = self.element_mut(el) else {
            return;
        };
        if name == "class" {
            e.classes.clear();
        } else {
            e.attributes.remove(name);
        }
        self.mutations += 1;
    }

    fn set_class(&mut self, el: ElementId, class: &str, on: bool) {
        let Some(e) = self.element_mut(el) else {
            return;
        };
        let present = e.classes.iter().any(|c| c == class);
        if on && !present {
            e.classes.push(class.to_string());
        } else if !on {
            e.classes.retain(|c| c != class);
        }
        self.mutations += 1;
    }

    fn set_style(&mut self, el: ElementId, property: &str, value: Option<&str>) {
        let Some(e) = self.element_mut(el) else {
            return;
        };
        match value {
            Some(v) => {
                e.styles.insert(property.to_string(), v.to_string());
            }
            None => {
                e.styles.remove(property);
            }
        }
        self.mutations += 1;
    }

    fn set_text_content(&mut self, el: ElementId, text: &str) {
        let Some(e) = self.element_mut(el) else {
            return;
        };
        e.children.clear();
        e.text = text.to_string();
        self.mutations += 1;
    }

    fn focus(&mut self, el: ElementId) {
        if self.is_alive(el) {
            self.active = Some(el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Selector;

    fn doc() -> Document {
        Document::new(Size::new(1024.0, 768.0))
    }

    #[test]
    fn append_and_query() {
        let mut d = doc();
        let body = d.body();
        let nav = d.append(body, "nav", &[("id", "main-nav"), ("class", "site nav")]);
        let ul = d.append(nav, "ul", &[("role", "menubar")]);
        assert_eq!(d.element_by_id("main-nav"), Some(nav));
        assert!(d.has_class(nav, "nav"));
        assert_eq!(d.attribute(nav, "class").as_deref(), Some("site nav"));
        let sel = Selector::parse("[role=menubar]").unwrap();
        assert_eq!(d.query_selector(body, &sel), Some(ul));
        assert_eq!(d.parent(ul), Some(nav));
        assert!(d.contains(body, ul));
        assert!(!d.contains(ul, nav));
    }

    #[test]
    fn writes_are_counted_and_builders_are_not() {
        let mut d = doc();
        let body = d.body();
        let a = d.append(body, "a", &[("href", "#")]);
        d.append_text(a, "Home");
        assert_eq!(d.mutation_count(), 0);
        d.set_attribute(a, "aria-current", "page");
        d.set_class(a, "active", true);
        d.set_style(a, "left", Some("0"));
        assert_eq!(d.mutation_count(), 3);
        d.focus(a);
        assert_eq!(d.mutation_count(), 3);
        assert_eq!(d.active_element(), Some(a));
        d.reset_mutations();
        assert_eq!(d.mutation_count(), 0);
    }

    #[test]
    fn text_content_is_concatenated() {
        let mut d = doc();
        let body = d.body();
        let a = d.append(body, "a", &[("href", "#")]);
        d.append_text(a, "Services ");
        let span = d.append(a, "span", &[("aria-hidden", "true")]);
        d.append_text(span, "▾");
        assert_eq!(d.text_content(a), "Services ▾");
    }

    #[test]
    fn remove_invalidates_ids_and_reuses_slots() {
        let mut d = doc();
        let body = d.body();
        let a = d.append(body, "div", &[]);
        let b = d.append(a, "button", &[]);
        d.focus(b);
        d.remove(a);
        assert!(!d.is_alive(a));
        assert!(!d.is_alive(b));
        assert_eq!(d.active_element(), None);
        assert!(d.children(body).is_empty());

        let c = d.append(body, "div", &[]);
        assert!(d.is_alive(c));
        assert_ne!(c, a);
        assert_ne!(c, b);
        // Stale writes are ignored.
        d.set_attribute(a, "id", "stale");
        assert_eq!(d.mutation_count(), 0);
    }

    #[test]
    fn focusability() {
        let mut d = doc();
        let body = d.body();
        let plain = d.append(body, "a", &[]);
        let link = d.append(body, "a", &[("href", "/")]);
        let button = d.append(body, "button", &[]);
        let span = d.append(body, "span", &[("tabindex", "0")]);
        let skipped = d.append(body, "button", &[("tabindex", "-1")]);
        assert!(!d.is_focusable(plain));
        assert!(d.is_focusable(link));
        assert!(d.is_focusable(button));
        assert!(d.is_focusable(span));
        assert!(!d.is_focusable(skipped));
        assert_eq!(d.first_focusable(body), Some(link));
    }
}
