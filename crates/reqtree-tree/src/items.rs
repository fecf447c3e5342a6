//! Hierarchical index placement.
//!
//! An [`ItemTree`] holds requirement items addressed by their dotted
//! [`Level`]. Items may be inserted in any order as long as each item's
//! ancestor chain is already present:
//!
//! - a one-segment level becomes a top-level node
//! - a longer level is placed under the node whose level equals its
//!   ancestor segments, found by walking down from the top level
//!
//! Siblings are kept ordered by level, so with dense numbering a level
//! `a.b.n` sits at position `n - 1` under `a.b`. Gaps in the numbering
//! (`1, 1.1, 1.3`, or a document starting at `2`) do not affect placement.
//!
//! A missing ancestor fails with [`Error::ParentNotFound`]; placeholders are
//! never created.
//!
//! ```rust
//! use reqtree_tree::ItemTree;
//!
//! let mut tree = ItemTree::new();
//! tree.insert("1", "Hardware").unwrap();
//! tree.insert("1.3", "AXI").unwrap();
//! tree.insert("1.3.1", "Burst length").unwrap();
//! assert!(tree.insert("2.1", "Orphan").unwrap_err().is_parent_not_found());
//!
//! let axi = tree.get_by_index("1.3").unwrap();
//! assert_eq!(tree.label(axi), Some("1.3 AXI"));
//! ```

use reqtree_core::{Error, Level, Result};
use serde::Serialize;

use crate::arena::{Arena, DepthFirst, NodeId};

/// A placed requirement item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemNode {
    /// Position of the item.
    pub level: Level,
    /// Free-text description.
    pub text: String,
    /// Display label: `"<index> <text>"`.
    pub label: String,
}

/// Tree of items addressed by dotted index paths.
#[derive(Clone, Debug, Default)]
pub struct ItemTree {
    arena: Arena<ItemNode>,
}

impl ItemTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `index` and insert an item labelled `"<index> <text>"`.
    pub fn insert(&mut self, index: &str, text: &str) -> Result<NodeId> {
        let level = Level::parse(index)?;
        self.insert_level(level, text)
    }

    /// Insert an item at an already parsed level.
    ///
    /// The item goes after every sibling whose level sorts at or before its
    /// own, so an equal level lands behind the existing one. The label uses
    /// the level's dotted text as written.
    pub fn insert_level(&mut self, level: Level, text: &str) -> Result<NodeId> {
        let parent = match level.parent() {
            None => None,
            Some(parent) => Some(
                self.find_parent(parent.segments())
                    .map_err(|_| Error::parent_not_found(level.as_str(), parent.to_string()))?,
            ),
        };

        let position = self
            .siblings(parent)
            .partition_point(|&id| self.arena.get(id).is_some_and(|node| node.level <= level));

        let index = level.as_str().to_string();
        let node = ItemNode {
            label: format!("{index} {text}"),
            level,
            text: text.to_string(),
        };
        let id = match parent {
            None => self.arena.insert_root(position, node),
            Some(parent) => self
                .arena
                .insert_child(parent, position, node)
                .ok_or_else(|| Error::not_found("item node", parent.index().to_string()))?,
        };

        log::debug!("Placed item {index}");
        Ok(id)
    }

    /// Resolve the node whose level is `path`.
    ///
    /// Starts among the top-level nodes and descends one segment at a time,
    /// at each step taking the first node whose level equals the path so
    /// far. Fails with [`Error::InvalidIndex`] for an empty path and
    /// [`Error::ParentNotFound`] when any step is missing.
    pub fn find_parent(&self, path: &[u32]) -> Result<NodeId> {
        if path.is_empty() {
            return Err(Error::invalid_index("", "empty index"));
        }

        let mut current = None;
        for depth in 1..=path.len() {
            let step = &path[..depth];
            let found = self.siblings(current).iter().copied().find(|&id| {
                self.arena
                    .get(id)
                    .is_some_and(|node| node.level.segments() == step)
            });
            match found {
                Some(id) => current = Some(id),
                None => return Err(Error::parent_not_found(join(path), join(step))),
            }
        }
        current.ok_or_else(|| Error::invalid_index(join(path), "empty index"))
    }

    /// Top-level nodes for `None`, otherwise the children of `parent`.
    fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => self.arena.roots(),
            Some(parent) => self.arena.children(parent),
        }
    }

    /// Look up the node currently at `level`.
    pub fn get(&self, level: &Level) -> Option<NodeId> {
        self.find_parent(level.segments()).ok()
    }

    /// Parse `index` and look up the node at that position.
    pub fn get_by_index(&self, index: &str) -> Option<NodeId> {
        Level::parse(index).ok().and_then(|level| self.get(&level))
    }

    /// The item stored at `id`.
    pub fn node(&self, id: NodeId) -> Option<&ItemNode> {
        self.arena.get(id)
    }

    /// The display label of `id`.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|node| node.label.as_str())
    }

    /// Top-level items in order.
    pub fn roots(&self) -> &[NodeId] {
        self.arena.roots()
    }

    /// Children of `id` in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.children(id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no items were inserted.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// All items in display order with their depth.
    pub fn depth_first(&self) -> DepthFirst<'_, ItemNode> {
        self.arena.depth_first()
    }

    /// The underlying arena.
    pub fn arena(&self) -> &Arena<ItemNode> {
        &self.arena
    }
}

fn join(path: &[u32]) -> String {
    path.iter().map(u32::to_string).collect::<Vec<_>>().join(".")
}

// ============================================================================
// Tests
// ============================================================================
