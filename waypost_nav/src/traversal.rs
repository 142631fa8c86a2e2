// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus traversal: which element gets focus for each key in each context.
//!
//! ## Key map
//!
//! | Context | Key | Action |
//! |---|---|---|
//! | menu bar | `ArrowRight` / `ArrowLeft` | next / previous top-level item, wrapping |
//! | menu bar dropdown trigger | `ArrowDown`, `Enter`, `Space` | open the dropdown, focus its first item |
//! | any list | `Home` / `End` | first / last item of the same list |
//! | dropdown or submenu panel | `ArrowDown` / `ArrowUp` | next / previous item, wrapping |
//! | panel item with a submenu | `ArrowRight` | open the submenu, focus its first item |
//! | submenu panel | `ArrowLeft` | close the submenu, focus its trigger |
//! | anywhere | `Escape` | close the innermost open panel, else close the mobile menu |
//!
//! Lists are resolved through the menu arena, so the owning panel of an item never depends on
//! where its trigger sits among DOM siblings. The pure pieces ([`classify`], [`wrap_next`],
//! [`wrap_prev`]) are public for hosts that render their own focus rings.

use waypost_tree::{Dom, ElementId, MenuId, MenuKind, MenuNode, MenuTree};

use crate::announce::Announcer;
use crate::controller::NavigationController;
use crate::types::{FocusContext, Key, Mode, Outcome};

/// Classify a menu item by the list it belongs to.
pub fn classify(tree: &MenuTree, item: MenuId) -> Option<FocusContext> {
    let node = tree.get(item)?;
    match node.parent() {
        None => Some(FocusContext::MenuBar),
        Some(parent) => match tree.get(parent)?.kind() {
            MenuKind::Dropdown => Some(FocusContext::DropdownPanel),
            MenuKind::Submenu => Some(FocusContext::SubmenuPanel),
            MenuKind::Leaf => None,
        },
    }
}

/// The item after `current` in `list`, wrapping from last to first.
///
/// ```
/// use waypost_nav::traversal::{wrap_next, wrap_prev};
///
/// let list = [10_u32, 20, 30];
/// assert_eq!(wrap_next(&list, 30), Some(10));
/// assert_eq!(wrap_prev(&list, 10), Some(30));
/// assert_eq!(wrap_next(&list, 99), None);
/// assert_eq!(wrap_next::<u32>(&[], 1), None);
/// ```
pub fn wrap_next<K: Copy + Eq>(list: &[K], current: K) -> Option<K> {
    let i = list.iter().position(|k| *k == current)?;
    list.get((i + 1) % list.len()).copied()
}

/// The item before `current` in `list`, wrapping from first to last.
pub fn wrap_prev<K: Copy + Eq>(list: &[K], current: K) -> Option<K> {
    let i = list.iter().position(|k| *k == current)?;
    list.get((i + list.len() - 1) % list.len()).copied()
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Step {
    Focus(MenuId),
    OpenAndFocusFirst(MenuId),
    CloseAndFocusTrigger(MenuId),
}

fn plan(tree: &MenuTree, item: MenuId, key: Key) -> Option<Step> {
    use FocusContext::{DropdownPanel, MenuBar, SubmenuPanel};

    let node = tree.get(item)?;
    let context = classify(tree, item)?;
    let siblings = tree.siblings(item);
    match (context, key) {
        (MenuBar, Key::ArrowRight) => wrap_next(siblings, item).map(Step::Focus),
        (MenuBar, Key::ArrowLeft) => wrap_prev(siblings, item).map(Step::Focus),
        (MenuBar, Key::ArrowDown | Key::Enter | Key::Space) if node.kind().is_popup() => {
            Some(Step::OpenAndFocusFirst(item))
        }
        (_, Key::Home) => siblings.first().copied().map(Step::Focus),
        (_, Key::End) => siblings.last().copied().map(Step::Focus),
        (DropdownPanel | SubmenuPanel, Key::ArrowDown) => wrap_next(siblings, item).map(Step::Focus),
        (DropdownPanel | SubmenuPanel, Key::ArrowUp) => wrap_prev(siblings, item).map(Step::Focus),
        (DropdownPanel | SubmenuPanel, Key::ArrowRight) if node.kind() == MenuKind::Submenu => {
            Some(Step::OpenAndFocusFirst(item))
        }
        (SubmenuPanel, Key::ArrowLeft) => node.parent().map(Step::CloseAndFocusTrigger),
        _ => None,
    }
}

impl<A: Announcer> NavigationController<A> {
    /// Classify the element that currently has focus.
    pub fn focus_context<D: Dom>(&self, dom: &D) -> Option<FocusContext> {
        let item = self.tree.by_control(dom.active_element()?)?;
        classify(&self.tree, item)
    }

    pub(crate) fn handle_key<D: Dom>(&mut self, dom: &mut D, target: ElementId, key: Key) -> Outcome {
        if key == Key::Escape {
            return self.escape(dom, target);
        }
        let Some(item) = self.tree.by_control(target) else {
            return Outcome::Ignored;
        };
        let Some(step) = plan(&self.tree, item, key) else {
            return Outcome::Ignored;
        };
        let handled = match step {
            Step::Focus(id) => self.focus_item(dom, id),
            Step::OpenAndFocusFirst(id) => {
                self.open(dom, id, self.clock);
                if self.disclosure.is_open(id) {
                    let first = self.tree.get(id).and_then(|n| n.children().first().copied());
                    if let Some(first) = first {
                        self.focus_item(dom, first);
                    }
                    true
                } else {
                    false
                }
            }
            Step::CloseAndFocusTrigger(id) => {
                if !self.close(dom, id, self.clock) {
                    self.focus_item(dom, id);
                }
                true
            }
        };
        Outcome::from_bool(handled)
    }

    fn escape<D: Dom>(&mut self, dom: &mut D, target: ElementId) -> Outcome {
        let focused = self.tree.owner_of(&*dom, target);
        if let Some(id) = self.innermost_open(focused) {
            return Outcome::from_bool(self.close(dom, id, self.clock));
        }
        if self.mobile.open && self.responsive.mode() == Mode::Mobile {
            self.set_mobile_menu_open(dom, false, self.clock);
            if let Some(toggle) = self.mobile.toggle {
                dom.focus(toggle);
            }
            return Outcome::Handled;
        }
        Outcome::Ignored
    }

    /// The deepest open panel on the focused item's path, else the deepest open panel anywhere.
    fn innermost_open(&self, focused: Option<MenuId>) -> Option<MenuId> {
        if let Some(found) = focused.and_then(|f| {
            self.tree
                .path_to_root(f)
                .into_iter()
                .rev()
                .find(|id| self.disclosure.is_open(*id))
        }) {
            return Some(found);
        }
        self.tree
            .popups()
            .filter(|n| self.disclosure.is_open(n.id()))
            .max_by_key(|n| self.tree.path_to_root(n.id()).len())
            .map(MenuNode::id)
    }

    fn focus_item<D: Dom>(&self, dom: &mut D, id: MenuId) -> bool {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        dom.focus(node.control());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use waypost_tree::Document;

    // Bar: Home, Services ▾ [Web, Hosting ▸ [Shared, Cloud], Dev], Contact
    fn tree() -> (MenuTree, [MenuId; 8]) {
        let mut doc = Document::new(Size::new(1024.0, 768.0));
        let body = doc.body();
        let list = doc.append(body, "ul", &[]);
        let link = |doc: &mut Document, parent: ElementId| {
            let li = doc.append(parent, "li", &[]);
            doc.append(li, "a", &[("href", "#")]);
            li
        };
        let trigger = |doc: &mut Document, parent: ElementId, panel: &str| {
            let li = doc.append(parent, "li", &[]);
            doc.append(
                li,
                "button",
                &[("aria-haspopup", "true"), ("aria-controls", panel)],
            );
            doc.append(li, "ul", &[("id", panel)])
        };
        link(&mut doc, list);
        let services = trigger(&mut doc, list, "services");
        link(&mut doc, services);
        let hosting = trigger(&mut doc, services, "hosting");
        link(&mut doc, hosting);
        link(&mut doc, hosting);
        link(&mut doc, services);
        link(&mut doc, list);

        let tree = MenuTree::scan(&doc, list);
        // Scan order: Home, Services, Web, Hosting, Shared, Cloud, Dev, Contact.
        let ids: [MenuId; 8] = core::array::from_fn(|i| tree.iter().nth(i).unwrap().id());
        (tree, ids)
    }

    #[test]
    fn contexts_follow_parent_kind() {
        let (tree, [home, services, web, hosting, shared, ..]) = tree();
        assert_eq!(classify(&tree, home), Some(FocusContext::MenuBar));
        assert_eq!(classify(&tree, services), Some(FocusContext::MenuBar));
        assert_eq!(classify(&tree, web), Some(FocusContext::DropdownPanel));
        assert_eq!(classify(&tree, hosting), Some(FocusContext::DropdownPanel));
        assert_eq!(classify(&tree, shared), Some(FocusContext::SubmenuPanel));
    }

    #[test]
    fn menu_bar_wraps_both_ways() {
        let (tree, [home, services, .., contact]) = tree();
        assert_eq!(plan(&tree, contact, Key::ArrowRight), Some(Step::Focus(home)));
        assert_eq!(plan(&tree, home, Key::ArrowLeft), Some(Step::Focus(contact)));
        assert_eq!(plan(&tree, home, Key::ArrowRight), Some(Step::Focus(services)));
    }

    #[test]
    fn menu_bar_trigger_opens() {
        let (tree, [home, services, ..]) = tree();
        for key in [Key::ArrowDown, Key::Enter, Key::Space] {
            assert_eq!(plan(&tree, services, key), Some(Step::OpenAndFocusFirst(services)));
        }
        // Leaves keep their native activation.
        assert_eq!(plan(&tree, home, Key::Enter), None);
        assert_eq!(plan(&tree, home, Key::ArrowDown), None);
    }

    #[test]
    fn panel_items_wrap_and_jump() {
        let (tree, [_, _, web, hosting, _, _, dev, ..]) = tree();
        assert_eq!(plan(&tree, dev, Key::ArrowDown), Some(Step::Focus(web)));
        assert_eq!(plan(&tree, web, Key::ArrowUp), Some(Step::Focus(dev)));
        assert_eq!(plan(&tree, web, Key::ArrowDown), Some(Step::Focus(hosting)));
        assert_eq!(plan(&tree, hosting, Key::Home), Some(Step::Focus(web)));
        assert_eq!(plan(&tree, hosting, Key::End), Some(Step::Focus(dev)));
    }

    #[test]
    fn submenu_enter_and_leave() {
        let (tree, [_, _, web, hosting, shared, cloud, ..]) = tree();
        assert_eq!(plan(&tree, hosting, Key::ArrowRight), Some(Step::OpenAndFocusFirst(hosting)));
        assert_eq!(plan(&tree, web, Key::ArrowRight), None);
        assert_eq!(plan(&tree, cloud, Key::ArrowDown), Some(Step::Focus(shared)));
        assert_eq!(plan(&tree, shared, Key::ArrowUp), Some(Step::Focus(cloud)));
        assert_eq!(plan(&tree, cloud, Key::ArrowLeft), Some(Step::CloseAndFocusTrigger(hosting)));
        // ArrowLeft inside a dropdown (not a submenu) does nothing.
        assert_eq!(plan(&tree, web, Key::ArrowLeft), None);
    }

    #[test]
    fn tab_and_other_keys_are_native() {
        let (tree, [home, _, web, ..]) = tree();
        assert_eq!(plan(&tree, home, Key::Tab), None);
        assert_eq!(plan(&tree, web, Key::Other), None);
    }

    #[test]
    fn wrap_on_single_item_stays_put() {
        assert_eq!(wrap_next(&[5_u8], 5), Some(5));
        assert_eq!(wrap_prev(&[5_u8], 5), Some(5));
    }
}
