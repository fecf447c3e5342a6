//! Utility modules for identifiers and path handling.
//!
//! # Modules
//!
//! - [`ids`]: Document prefix and item UID helpers
//! - [`paths`]: Generic path utilities (tilde expansion, marker search)
//! - [`resolver`]: Project directory resolution

pub mod ids;
pub mod paths;
pub mod resolver;
