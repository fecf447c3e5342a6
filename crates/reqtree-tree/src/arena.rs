//! Ordered forest stored in an arena.
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]. Each node
//! keeps its parent, an ordered list of children, and an `expanded` flag
//! used only for display. Nodes are never removed or moved once inserted.

use serde::{Deserialize, Serialize};

// ============================================================================
// NodeId
// ============================================================================

/// Handle to a node in an [`Arena`].
///
/// Only meaningful for the arena that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena slot.
    pub fn index(self) -> usize {
        self.0
    }
}

// ============================================================================
// Arena
// ============================================================================

#[derive(Clone, Debug)]
struct Slot<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
}

/// An ordered forest of `T` values.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    roots: Vec<NodeId>,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets a node's value.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.value)
    }

    /// Gets a node's value mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.value)
    }

    /// Top-level nodes in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of `id` in order (empty for an unknown id).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of `id`, `None` for top-level or unknown nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    /// Top-level node at 0-based position `pos`.
    pub fn root_at(&self, pos: usize) -> Option<NodeId> {
        self.roots.get(pos).copied()
    }

    /// Child of `id` at 0-based position `pos`.
    pub fn child_at(&self, id: NodeId, pos: usize) -> Option<NodeId> {
        self.children(id).get(pos).copied()
    }

    /// Insert a top-level node at `pos`, clamped to the number of roots.
    pub fn insert_root(&mut self, pos: usize, value: T) -> NodeId {
        let id = self.push(value, None);
        let pos = pos.min(self.roots.len());
        self.roots.insert(pos, id);
        id
    }

    /// Insert a child of `parent` at `pos`, clamped to its child count.
    ///
    /// Returns `None` if `parent` is not in this arena.
    pub fn insert_child(&mut self, parent: NodeId, pos: usize, value: T) -> Option<NodeId> {
        if parent.0 >= self.slots.len() {
            return None;
        }
        let id = self.push(value, Some(parent));
        let children = &mut self.slots[parent.0].children;
        let pos = pos.min(children.len());
        children.insert(pos, id);
        Some(id)
    }

    fn push(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            value,
            parent,
            children: Vec::new(),
            expanded: false,
        });
        id
    }

    /// Mark a node expanded or collapsed. Unknown ids are ignored.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.expanded = expanded;
        }
    }

    /// Whether a node is marked expanded.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.expanded)
    }

    /// First node, in insertion order, whose value matches `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeId> {
        self.slots
            .iter()
            .position(|slot| predicate(&slot.value))
            .map(NodeId)
    }

    /// Number of ancestors above `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// All nodes in display order (pre-order), with their depth.
    pub fn depth_first(&self) -> DepthFirst<'_, T> {
        let stack = self.roots.iter().rev().map(|&id| (0, id)).collect();
        DepthFirst { arena: self, stack }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator returned by [`Arena::depth_first`].
pub struct DepthFirst<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<(usize, NodeId)>,
}

impl<T> Iterator for DepthFirst<'_, T> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        for &child in self.arena.children(id).iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, id))
    }
}
