//! Requirements store for reqtree.
//!
//! A requirements store turns a project directory into a [`Project`]: a set
//! of [`Document`]s, each carrying an identifying prefix, an optional parent
//! prefix, and its [`Item`]s in display order.
//!
//! # Modules
//!
//! - [`model`]: `Project`, `Document`, `Item`
//! - [`fs`]: [`FileStore`], which reads documents and items from YAML files
//! - [`memory`]: [`MemoryStore`], which serves a prebuilt project
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reqtree_store::{FileStore, RequirementsStore};
//!
//! let project = FileStore::new().build(Path::new("./reqs")).unwrap();
//! for document in &project.documents {
//!     println!("{} ({} items)", document.prefix, document.items.len());
//! }
//! ```

use std::path::Path;

use reqtree_core::Result;

mod format;
pub mod fs;
pub mod memory;
pub mod model;

pub use fs::{FileStore, StoreOptions, DEFAULT_ITEM_EXTENSION, DEFAULT_SETTINGS_FILE};
pub use memory::MemoryStore;
pub use model::{Document, Item, Project};

/// Source of documents and items.
///
/// Implementations parse a project directory synchronously and hand back
/// every document found under it.
pub trait RequirementsStore {
    /// Load the project rooted at `root`.
    fn build(&self, root: &Path) -> Result<Project>;
}
