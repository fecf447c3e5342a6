//! Requirement and document trees for reqtree.
//!
//! This crate holds the presentation-independent model behind every reqtree
//! view. Trees live in an [`Arena`] and are addressed by [`NodeId`], so the
//! placement and assembly logic runs headless and is tested without any
//! rendering surface.
//!
//! # Modules
//!
//! - [`arena`]: ordered forest storage
//! - [`items`]: hierarchical index placement ([`ItemTree`])
//! - [`documents`]: document tree assembly ([`DocumentTree`])
//! - [`view`]: per-document tree/table views and the [`ViewRegistry`]
//! - [`snapshot`]: nested serializable copies for JSON output
//!
//! # Example
//!
//! ```rust
//! use reqtree_tree::ItemTree;
//!
//! let mut tree = ItemTree::new();
//! for (index, text) in [("1", "Hardware"), ("1.1", "AXI"), ("2", "Software")] {
//!     tree.insert(index, text).unwrap();
//! }
//! assert_eq!(tree.roots().len(), 2);
//! ```

pub mod arena;
pub mod documents;
pub mod items;
pub mod snapshot;
pub mod view;

pub use arena::{Arena, NodeId};
pub use documents::{DocumentNode, DocumentTree};
pub use items::{ItemNode, ItemTree};
pub use snapshot::TreeSnapshot;
pub use view::{ItemTable, ItemView, TableRow, ViewMode, ViewRegistry};
