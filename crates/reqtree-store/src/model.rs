//! Document and item model.
//!
//! These are the values a [`RequirementsStore`](crate::RequirementsStore)
//! hands back: a [`Project`] owning its [`Document`]s, each owning its
//! [`Item`]s in display order.

use std::path::{Path, PathBuf};

use reqtree_core::{Level, Result};
use serde::Serialize;

// ============================================================================
// Item
// ============================================================================

/// A single requirement entry within a document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
    /// Unique identifier (e.g., "REQ001").
    pub uid: String,
    /// Position within the document.
    pub level: Level,
    /// Free-text description.
    pub text: String,
    /// Optional heading text.
    pub header: String,
    /// Inactive items are hidden unless explicitly included.
    pub active: bool,
    /// Non-normative items are headings or informative text.
    pub normative: bool,
    /// Derived items are not expected to link to a parent item.
    pub derived: bool,
    /// UIDs of parent items this item links to.
    pub links: Vec<String>,
}

impl Item {
    /// Creates an active, normative item.
    pub fn new(uid: impl Into<String>, level: &str, text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            uid: uid.into(),
            level: Level::parse(level)?,
            text: text.into(),
            header: String::new(),
            active: true,
            normative: true,
            derived: false,
            links: Vec::new(),
        })
    }

    /// Sets the header.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Adds a link to a parent item.
    pub fn with_link(mut self, uid: impl Into<String>) -> Self {
        self.links.push(uid.into());
        self
    }

    /// Returns `true` when the level ended in a zero, i.e. a heading.
    pub fn is_heading(&self) -> bool {
        self.level
            .as_str()
            .rsplit('.')
            .map(str::trim)
            .find(|segment| !segment.is_empty())
            .is_some_and(|segment| segment.chars().all(|c| c == '0'))
    }
}

// ============================================================================
// Document
// ============================================================================

/// A named collection of items, optionally nested under a parent document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    /// Unique identifying prefix (e.g., "SRD").
    pub prefix: String,
    /// Prefix of the parent document; `None` for a root document.
    pub parent: Option<String>,
    /// Directory the document was loaded from (empty for in-memory documents).
    pub path: PathBuf,
    /// Items in display order.
    pub items: Vec<Item>,
}

impl Document {
    /// Creates a root document with no items.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            parent: None,
            path: PathBuf::new(),
            items: Vec::new(),
        }
    }

    /// Sets the parent prefix.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the source directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Appends an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Returns `true` if this document has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Looks up an item by UID.
    pub fn item(&self, uid: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.uid == uid)
    }
}

// ============================================================================
// Project
// ============================================================================

/// A loaded project: every document found under a root directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Project {
    /// Directory the project was loaded from.
    pub root: PathBuf,
    /// Documents in discovery order.
    pub documents: Vec<Document>,
}

impl Project {
    /// Creates an empty project rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            documents: Vec::new(),
        }
    }

    /// Appends a document.
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Looks up a document by prefix.
    pub fn document(&self, prefix: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.prefix == prefix)
    }

    /// Total number of items across all documents.
    pub fn item_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.items.len()).sum()
    }

    /// Returns `true` if no documents were found.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new("REQ001", "1.2", "Boot within 2s").unwrap();
        assert_eq!(item.level.segments(), &[1, 2]);
        assert!(item.active);
        assert!(item.normative);
        assert!(item.links.is_empty());
    }

    #[test]
    fn test_item_new_rejects_empty_level() {
        let err = Item::new("REQ001", "", "text").unwrap_err();
        assert!(err.is_invalid_index());
    }

    #[test]
    fn test_item_is_heading() {
        assert!(Item::new("R1", "1.0", "Intro").unwrap().is_heading());
        assert!(Item::new("R2", "2.1.0", "Sub").unwrap().is_heading());
        assert!(!Item::new("R3", "1.1", "Req").unwrap().is_heading());
        assert!(!Item::new("R4", "10", "Req").unwrap().is_heading());
    }

    #[test]
    fn test_document_builder() {
        let doc = Document::new("LLR")
            .with_parent("HLR")
            .with_item(Item::new("LLR001", "1", "a").unwrap().with_link("HLR001"));

        assert!(!doc.is_root());
        assert_eq!(doc.parent.as_deref(), Some("HLR"));
        assert_eq!(doc.item("LLR001").unwrap().links, vec!["HLR001"]);
        assert!(doc.item("LLR002").is_none());
    }

    #[test]
    fn test_project_lookup() {
        let project = Project::new("/reqs")
            .with_document(Document::new("SYS").with_item(Item::new("SYS1", "1", "a").unwrap()))
            .with_document(Document::new("HLR").with_parent("SYS"));

        assert_eq!(project.document("HLR").unwrap().parent.as_deref(), Some("SYS"));
        assert!(project.document("LLR").is_none());
        assert_eq!(project.item_count(), 1);
        assert!(!project.is_empty());
    }
}
