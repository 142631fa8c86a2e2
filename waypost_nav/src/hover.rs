// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent: which panels the pointer is inside, and which open or close as it moves.
//!
//! The pointer's element is mapped to the chain of live popups whose item contains it,
//! outermost first. Moving the pointer compares the new chain with the previous one: panels
//! only on the old chain close (innermost first), panels only on the new chain open
//! (outermost first), so a submenu is never open without its parent.
//!
//! The controller does this itself when [`NavConfig::open_on_hover`](crate::NavConfig::open_on_hover)
//! is set; [`HoverState`] is public for hosts that want their own policy.

use alloc::vec::Vec;

use waypost_tree::{Dom, ElementId, MenuId, MenuNode, MenuTree};

/// A panel the pointer entered or left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer moved inside this node's item.
    Enter(MenuId),
    /// The pointer is no longer inside this node's item.
    Leave(MenuId),
}

/// The chain of popups currently under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    chain: Vec<MenuId>,
}

impl HoverState {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the chain without reporting anything, e.g. after every panel was closed.
    pub fn reset(&mut self) {
        self.chain.clear();
    }

    /// Move the pointer to `target` (`None` once it leaves the menu) and report the changes.
    pub fn update<D: Dom + ?Sized>(
        &mut self,
        tree: &MenuTree,
        dom: &D,
        target: Option<ElementId>,
    ) -> Vec<HoverEvent> {
        let next = target.map(|t| chain_at(tree, dom, t)).unwrap_or_default();
        let keep = self
            .chain
            .iter()
            .zip(&next)
            .position(|(old, new)| old != new)
            .unwrap_or_else(|| self.chain.len().min(next.len()));

        let mut events: Vec<HoverEvent> =
            self.chain.drain(keep..).rev().map(HoverEvent::Leave).collect();
        events.extend(next[keep..].iter().copied().map(HoverEvent::Enter));
        self.chain = next;
        events
    }
}

/// Live popups on the path from the menu bar down to the item containing `target`.
///
/// Leaves are skipped: a plain link inside a dropdown keeps only the dropdown in the chain.
fn chain_at<D: Dom + ?Sized>(tree: &MenuTree, dom: &D, target: ElementId) -> Vec<MenuId> {
    let Some(owner) = tree.owner_of(dom, target) else {
        return Vec::new();
    };
    tree.path_to_root(owner)
        .into_iter()
        .filter(|id| tree.get(*id).is_some_and(MenuNode::is_live_popup))
        .collect()
}
