//! Document tree assembly.
//!
//! Documents reference their parent by prefix. A document without a parent
//! becomes a top-level node; otherwise it is attached under the first
//! previously inserted node with a matching prefix, and that node is marked
//! expanded.
//!
//! [`DocumentTree::assemble`] inserts strictly in the given order, so
//! parents must come first. [`DocumentTree::assemble_deferred`] retries
//! documents whose parent has not appeared yet.

use reqtree_core::{Error, Result};
use reqtree_store::Document;
use serde::Serialize;

use crate::arena::{Arena, DepthFirst, NodeId};

/// A document placed in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    /// Identifying prefix.
    pub prefix: String,
    /// Parent prefix, if any.
    pub parent: Option<String>,
    /// Number of items the document carried when inserted.
    pub item_count: usize,
}

/// Tree of documents keyed by prefix.
#[derive(Clone, Debug, Default)]
pub struct DocumentTree {
    arena: Arena<DocumentNode>,
}

impl DocumentTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document by prefix.
    ///
    /// Fails with [`Error::ParentNotFound`] if `parent` names a prefix that
    /// has not been inserted yet; nothing is inserted in that case.
    pub fn insert(&mut self, prefix: &str, parent: Option<&str>) -> Result<NodeId> {
        self.insert_node(DocumentNode {
            prefix: prefix.to_string(),
            parent: parent.map(str::to_string),
            item_count: 0,
        })
    }

    /// Insert a store document.
    pub fn insert_document(&mut self, document: &Document) -> Result<NodeId> {
        self.insert_node(DocumentNode {
            prefix: document.prefix.clone(),
            parent: document.parent.clone(),
            item_count: document.items.len(),
        })
    }

    fn insert_node(&mut self, node: DocumentNode) -> Result<NodeId> {
        let Some(parent_prefix) = node.parent.clone() else {
            log::debug!("Document {} is a root", node.prefix);
            let end = self.arena.roots().len();
            return Ok(self.arena.insert_root(end, node));
        };

        let parent = self
            .find(&parent_prefix)
            .ok_or_else(|| Error::parent_not_found(&node.prefix, &parent_prefix))?;

        log::debug!("Document {} attached under {parent_prefix}", node.prefix);
        let end = self.arena.children(parent).len();
        let id = self
            .arena
            .insert_child(parent, end, node)
            .ok_or_else(|| Error::not_found("document", parent_prefix))?;
        self.arena.set_expanded(parent, true);
        Ok(id)
    }

    /// Insert documents in order; the first failure aborts.
    pub fn assemble<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Result<Self> {
        let mut tree = Self::new();
        for document in documents {
            tree.insert_document(document)?;
        }
        Ok(tree)
    }

    /// Insert documents, deferring any whose parent is not present yet.
    ///
    /// Pending documents are retried after each pass. When a pass inserts
    /// nothing, the first pending document fails with
    /// [`Error::ParentNotFound`].
    pub fn assemble_deferred<'a>(
        documents: impl IntoIterator<Item = &'a Document>,
    ) -> Result<Self> {
        let mut tree = Self::new();
        let mut pending: Vec<&Document> = documents.into_iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();

            for document in pending {
                let ready = document
                    .parent
                    .as_deref()
                    .is_none_or(|parent| tree.find(parent).is_some());
                if ready {
                    tree.insert_document(document)?;
                } else {
                    log::debug!("Deferring document {}", document.prefix);
                    deferred.push(document);
                }
            }

            if deferred.len() == before {
                let stuck = deferred[0];
                return Err(Error::parent_not_found(
                    &stuck.prefix,
                    stuck.parent.as_deref().unwrap_or_default(),
                ));
            }
            pending = deferred;
        }
        Ok(tree)
    }

    /// First node, in insertion order, with the given prefix.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        self.arena.find(|node| node.prefix == prefix)
    }

    /// The document stored at `id`.
    pub fn node(&self, id: NodeId) -> Option<&DocumentNode> {
        self.arena.get(id)
    }

    /// Whether `id` is marked expanded.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.arena.is_expanded(id)
    }

    /// Prefixes in display order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.arena
            .depth_first()
            .filter_map(|(_, id)| self.arena.get(id))
            .map(|node| node.prefix.as_str())
            .collect()
    }

    /// Top-level documents in order.
    pub fn roots(&self) -> &[NodeId] {
        self.arena.roots()
    }

    /// Child documents of `id` in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.children(id)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no documents were inserted.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// All documents in display order with their depth.
    pub fn depth_first(&self) -> DepthFirst<'_, DocumentNode> {
        self.arena.depth_first()
    }

    /// The underlying arena.
    pub fn arena(&self) -> &Arena<DocumentNode> {
        &self.arena
    }
}

// ============================================================================
// Tests
// ============================================================================
