// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu arena: scanning, structure, and lookups.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::dom::Dom;
use crate::types::{ElementId, MenuFlags, MenuId, MenuKind};

/// A navigable menu entry discovered in markup.
#[derive(Clone, Debug)]
pub struct MenuNode {
    id: MenuId,
    label: String,
    kind: MenuKind,
    flags: MenuFlags,
    parent: Option<MenuId>,
    children: Vec<MenuId>,
    item: ElementId,
    control: ElementId,
    panel: Option<ElementId>,
}

impl MenuNode {
    /// Arena identifier.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Display text, from `aria-label` or the control's collapsed text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Node kind.
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    /// Markup flags.
    pub fn flags(&self) -> MenuFlags {
        self.flags
    }

    /// Parent node, `None` for menu-bar items.
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    /// Items of this node's panel in document order. Empty for leaves and inert popups.
    pub fn children(&self) -> &[MenuId] {
        &self.children
    }

    /// The list item element wrapping the control (and the panel, if any).
    pub fn item(&self) -> ElementId {
        self.item
    }

    /// The focusable link or trigger.
    pub fn control(&self) -> ElementId {
        self.control
    }

    /// The disclosed panel, if the trigger's `aria-controls` resolved.
    pub fn panel(&self) -> Option<ElementId> {
        self.panel
    }

    /// Whether the node discloses a panel that exists.
    pub fn is_live_popup(&self) -> bool {
        self.kind.is_popup() && self.panel.is_some()
    }
}

/// The menu structure under a navigation list, built once from markup.
///
/// ## Markup contract
///
/// - Each direct child of the list (or of a panel) that contains a focusable element is an item;
///   the first focusable descendant is its control.
/// - A control with `aria-haspopup="true"` (or `"menu"`) is a trigger; its `aria-controls`
///   names the panel by `id`. Triggers on the menu bar are [`MenuKind::Dropdown`]; deeper
///   ones are [`MenuKind::Submenu`].
/// - A trigger whose panel cannot be resolved is kept with [`MenuFlags::INERT`] and no children.
///
/// ```
/// use kurbo::Size;
/// use waypost_tree::{Document, MenuKind, MenuTree};
///
/// let mut doc = Document::new(Size::new(1024.0, 768.0));
/// let body = doc.body();
/// let ul = doc.append(body, "ul", &[]);
/// let li = doc.append(ul, "li", &[]);
/// let a = doc.append(li, "a", &[("href", "/")]);
/// doc.append_text(a, "Home");
///
/// let tree = MenuTree::scan(&doc, ul);
/// assert_eq!(tree.bar().len(), 1);
/// let home = tree.get(tree.bar()[0]).unwrap();
/// assert_eq!(home.label(), "Home");
/// assert_eq!(home.kind(), MenuKind::Leaf);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MenuTree {
    list: Option<ElementId>,
    nodes: Vec<MenuNode>,
    bar: Vec<MenuId>,
    by_control: BTreeMap<ElementId, MenuId>,
    by_item: BTreeMap<ElementId, MenuId>,
    by_panel: BTreeMap<ElementId, MenuId>,
}

impl MenuTree {
    /// An empty tree (no list, no items).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan the items under `list`.
    pub fn scan<D: Dom + ?Sized>(dom: &D, list: ElementId) -> Self {
        let mut tree = Self {
            list: Some(list),
            ..Self::default()
        };
        tree.scan_list(dom, list, None, 0);
        tree
    }

    /// The list element this tree was scanned from.
    pub fn list(&self) -> Option<ElementId> {
        self.list
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no items were found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Access a node.
    pub fn get(&self, id: MenuId) -> Option<&MenuNode> {
        self.nodes.get(id.idx())
    }

    /// Menu-bar items in document order.
    pub fn bar(&self) -> &[MenuId] {
        &self.bar
    }

    /// Siblings of `id` including itself: the menu bar for top-level nodes, else the parent's items.
    pub fn siblings(&self, id: MenuId) -> &[MenuId] {
        match self.get(id).and_then(MenuNode::parent) {
            Some(p) => self.get(p).map(MenuNode::children).unwrap_or(&[]),
            None => &self.bar,
        }
    }

    /// Iterate every node in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> + '_ {
        self.nodes.iter()
    }

    /// Iterate nodes that disclose a resolved panel, in scan order (parents before children).
    pub fn popups(&self) -> impl Iterator<Item = &MenuNode> + '_ {
        self.nodes.iter().filter(|n| n.is_live_popup())
    }

    /// Node whose control is `el`.
    pub fn by_control(&self, el: ElementId) -> Option<MenuId> {
        self.by_control.get(&el).copied()
    }

    /// Node whose panel is `el`.
    pub fn by_panel(&self, el: ElementId) -> Option<MenuId> {
        self.by_panel.get(&el).copied()
    }

    /// Innermost node whose item element contains `el`.
    pub fn owner_of<D: Dom + ?Sized>(&self, dom: &D, el: ElementId) -> Option<MenuId> {
        let mut cur = Some(el);
        while let Some(c) = cur {
            if let Some(id) = self.by_item.get(&c) {
                return Some(*id);
            }
            if Some(c) == self.list {
                return None;
            }
            cur = dom.parent(c);
        }
        None
    }

    /// Root→node path of ids (inclusive).
    pub fn path_to_root(&self, id: MenuId) -> Vec<MenuId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.get(c).and_then(MenuNode::parent);
        }
        out.reverse();
        out
    }

    /// All descendants of `id` in depth-first order (excluding `id`).
    pub fn descendants(&self, id: MenuId) -> Vec<MenuId> {
        let mut out = Vec::new();
        let mut stack: Vec<MenuId> = self
            .get(id)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(c) = stack.pop() {
            out.push(c);
            if let Some(n) = self.get(c) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    // --- internals ---

    fn scan_list<D: Dom + ?Sized>(
        &mut self,
        dom: &D,
        list: ElementId,
        parent: Option<MenuId>,
        depth: usize,
    ) {
        for item in dom.children(list) {
            let Some(control) = dom.first_focusable(item) else {
                continue;
            };
            if self.by_control.contains_key(&control) {
                continue;
            }
            let has_popup = matches!(
                dom.attribute(control, "aria-haspopup").as_deref(),
                Some("true" | "menu")
            );
            let kind = match (has_popup, depth) {
                (false, _) => MenuKind::Leaf,
                (true, 0) => MenuKind::Dropdown,
                (true, _) => MenuKind::Submenu,
            };
            let label = dom
                .attribute(control, "aria-label")
                .unwrap_or_else(|| dom.text_content(control));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "MenuId uses 32-bit indices."
            )]
            let id = MenuId(self.nodes.len() as u32);
            let mut flags = MenuFlags::empty();
            if has_popup {
                flags |= MenuFlags::HAS_POPUP;
            }
            self.nodes.push(MenuNode {
                id,
                label: collapse_whitespace(&label),
                kind,
                flags,
                parent,
                children: Vec::new(),
                item,
                control,
                panel: None,
            });
            self.by_control.insert(control, id);
            self.by_item.insert(item, id);
            match parent {
                Some(p) => self.nodes[p.idx()].children.push(id),
                None => self.bar.push(id),
            }
            if has_popup {
                self.resolve_panel(dom, id, control, depth);
            }
        }
    }

    fn resolve_panel<D: Dom + ?Sized>(
        &mut self,
        dom: &D,
        id: MenuId,
        control: ElementId,
        depth: usize,
    ) {
        let target = dom.attribute(control, "aria-controls");
        let panel = target.as_deref().and_then(|t| dom.element_by_id(t));
        // A panel that encloses its own trigger, or is already claimed, would recurse forever.
        let usable = panel.filter(|p| !dom.contains(*p, control) && !self.by_panel.contains_key(p));
        match usable {
            Some(panel) => {
                self.nodes[id.idx()].panel = Some(panel);
                self.by_panel.insert(panel, id);
                self.scan_list(dom, panel, Some(id), depth + 1);
            }
            None => {
                log::warn!(
                    "menu trigger {:?} references panel {:?} which cannot be resolved; leaving it inert",
                    self.nodes[id.idx()].label,
                    target.as_deref().unwrap_or("")
                );
                self.nodes[id.idx()].flags |= MenuFlags::INERT;
            }
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
