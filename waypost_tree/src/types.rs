// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: element and menu identifiers, menu kinds, and flags.

/// Identifier for an element in a [`Document`](crate::Document) (or any [`Dom`](crate::Dom) host).
///
/// This is a small, copyable handle that stays stable while the element is attached
/// but becomes invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// Hosts that wrap a real DOM can mint ids with [`ElementId::from_raw`] and keep their
/// own side table from ids to nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Build an identifier from a host-defined slot and generation.
    pub const fn from_raw(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Return the raw `(slot, generation)` pair.
    pub const fn to_raw(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

/// Identifier for a node in a [`MenuTree`](crate::MenuTree).
///
/// Menu nodes are discovered once when the markup is scanned and are never removed,
/// so a `MenuId` is a plain arena index and never goes stale for the tree that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MenuId(pub(crate) u32);

impl MenuId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Return the arena index of this node.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The role a menu node plays. Fixed at scan time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuKind {
    /// A plain navigable entry with no panel.
    Leaf,
    /// A top-level entry whose trigger discloses a panel.
    Dropdown,
    /// An entry inside a panel whose trigger discloses a nested panel.
    Submenu,
}

impl MenuKind {
    /// Whether this kind owns a disclosure panel.
    pub const fn is_popup(self) -> bool {
        matches!(self, Self::Dropdown | Self::Submenu)
    }
}

bitflags::bitflags! {
    /// Per-node markup facts recorded during the scan.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u8 {
        /// The control declares `aria-haspopup`.
        const HAS_POPUP = 0b0000_0001;
        /// The control's `aria-controls` target could not be resolved; the node is inert.
        const INERT     = 0b0000_0010;
    }
}
