//! Per-document item views.
//!
//! A document's items are shown either as an [`ItemTree`] built by index
//! placement, or as a flat [`ItemTable`] with one row per item. Views are
//! held in a [`ViewRegistry`] keyed by document prefix.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use reqtree_core::{Error, Result};
use reqtree_store::Document;
use serde::{Deserialize, Serialize};

use crate::items::ItemTree;

// ============================================================================
// ViewMode
// ============================================================================

/// How a document's items are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Hierarchy built from item levels.
    #[default]
    Tree,
    /// One row per item.
    Table,
}

impl ViewMode {
    /// The mode name as used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(Self::Tree),
            "table" => Ok(Self::Table),
            other => Err(Error::config(format!(
                "Unknown view mode '{other}' (expected 'tree' or 'table')"
            ))),
        }
    }
}

// ============================================================================
// ItemTable
// ============================================================================

/// One row of an [`ItemTable`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Item UID.
    pub uid: String,
    /// Dotted level as written.
    pub level: String,
    /// Item text.
    pub text: String,
}

/// Flat listing of a document's items in store order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ItemTable {
    /// Rows in order.
    pub rows: Vec<TableRow>,
}

impl ItemTable {
    /// Build a table from a document's items.
    pub fn from_document(document: &Document) -> Self {
        let rows = document
            .items
            .iter()
            .map(|item| TableRow {
                uid: item.uid.clone(),
                level: item.level.as_str().to_string(),
                text: item.text.clone(),
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// ItemView
// ============================================================================

/// The materialized view of one document.
#[derive(Clone, Debug)]
pub enum ItemView {
    /// Items placed by level.
    Tree(ItemTree),
    /// Items listed flat.
    Table(ItemTable),
}

impl ItemView {
    /// Build the view of `document` in the given mode.
    ///
    /// Tree mode inserts items in store order and fails on the first item
    /// whose level cannot be placed.
    pub fn build(document: &Document, mode: ViewMode) -> Result<Self> {
        match mode {
            ViewMode::Tree => {
                let mut tree = ItemTree::new();
                for item in &document.items {
                    tree.insert_level(item.level.clone(), &item.text)?;
                }
                Ok(Self::Tree(tree))
            }
            ViewMode::Table => Ok(Self::Table(ItemTable::from_document(document))),
        }
    }

    /// The mode this view was built in.
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Tree(_) => ViewMode::Tree,
            Self::Table(_) => ViewMode::Table,
        }
    }

    /// Number of items shown.
    pub fn len(&self) -> usize {
        match self {
            Self::Tree(tree) => tree.len(),
            Self::Table(table) => table.len(),
        }
    }

    /// Returns `true` if the view shows no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tree, if this is a tree view.
    pub fn as_tree(&self) -> Option<&ItemTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Table(_) => None,
        }
    }

    /// The table, if this is a table view.
    pub fn as_table(&self) -> Option<&ItemTable> {
        match self {
            Self::Table(table) => Some(table),
            Self::Tree(_) => None,
        }
    }
}

// ============================================================================
// ViewRegistry
// ============================================================================

/// Item views keyed by document prefix.
#[derive(Clone, Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ItemView>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view for every document.
    ///
    /// A document whose items cannot be placed fails the whole build,
    /// with the document prefix added to the error.
    pub fn build<'a>(
        documents: impl IntoIterator<Item = &'a Document>,
        mode: ViewMode,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for document in documents {
            let view = ItemView::build(document, mode).map_err(|e| match e {
                Error::ParentNotFound { child, parent } => Error::ParentNotFound {
                    child: format!("{}:{child}", document.prefix),
                    parent,
                },
                other => other,
            })?;
            registry.insert(&document.prefix, view);
        }
        Ok(registry)
    }

    /// Store the view for `prefix`, replacing any previous one.
    pub fn insert(&mut self, prefix: &str, view: ItemView) {
        self.views.insert(prefix.to_string(), view);
    }

    /// The view for `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&ItemView> {
        self.views.get(prefix)
    }

    /// Number of views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if no views are registered.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
