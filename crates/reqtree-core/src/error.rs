//! Error types for reqtree-core.
//!
//! Every reqtree library crate reports failures through this single
//! [`Error`] enum. Errors are raised synchronously to the immediate caller;
//! nothing is retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for reqtree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or arranging requirements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A dotted index path could not be parsed, or parsed to nothing.
    #[error("Invalid item index '{index}': {reason}")]
    InvalidIndex {
        /// The index text as supplied.
        index: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The ancestor or parent node required for an insertion does not exist.
    #[error("Parent '{parent}' not found for '{child}'")]
    ParentNotFound {
        /// The node being inserted.
        child: String,
        /// The parent reference that could not be resolved.
        parent: String,
    },

    /// I/O error tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    IoPath {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML, TOML, or JSON content.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named resource does not exist.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// Kind of resource ("document", "project", ...).
        resource_type: String,
        /// Identifier that was looked up.
        id: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidIndex`].
    pub fn invalid_index(index: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidIndex {
            index: index.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ParentNotFound`].
    pub fn parent_not_found(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Error::ParentNotFound {
            child: child.into(),
            parent: parent.into(),
        }
    }

    /// Creates an I/O error carrying the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns `true` for [`Error::InvalidIndex`].
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Error::InvalidIndex { .. })
    }

    /// Returns `true` for [`Error::ParentNotFound`].
    pub fn is_parent_not_found(&self) -> bool {
        matches!(self, Error::ParentNotFound { .. })
    }

    /// Returns `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_display() {
        let err = Error::invalid_index("", "empty index");
        assert_eq!(err.to_string(), "Invalid item index '': empty index");
        assert!(err.is_invalid_index());
        assert!(!err.is_parent_not_found());
    }

    #[test]
    fn test_parent_not_found_display() {
        let err = Error::parent_not_found("1.1", "1");
        assert_eq!(err.to_string(), "Parent '1' not found for '1.1'");
        assert!(err.is_parent_not_found());
    }

    #[test]
    fn test_io_with_path_mentions_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(io, "/tmp/reqs/REQ001.yml");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/reqs/REQ001.yml"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("document", "SRD");
        assert_eq!(err.to_string(), "document not found: SRD");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::other("boom");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
