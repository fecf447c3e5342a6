//! reqtree core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all reqtree
//! crates. It has no internal reqtree dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`level`]: Dotted index paths addressing requirement items
//! - [`util`]: ID, path, and project-location utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod level;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use level::Level;

// Convenience re-exports from util
pub use util::ids::{normalize_prefix, split_uid, uid_from_path};
pub use util::resolver::ProjectLocator;
