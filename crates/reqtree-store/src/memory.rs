//! In-memory requirements store.

use std::path::Path;

use reqtree_core::{Error, Result};

use crate::model::{Document, Project};
use crate::RequirementsStore;

/// A store that returns a prebuilt [`Project`].
///
/// `build` ignores directory contents but still refuses a root other than
/// the one the project was created with, so callers see the same
/// not-found behavior as with a real store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    project: Project,
}

impl MemoryStore {
    /// Creates a store serving `project`.
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Appends a document to the served project.
    pub fn with_document(mut self, document: Document) -> Self {
        self.project.documents.push(document);
        self
    }
}

impl RequirementsStore for MemoryStore {
    fn build(&self, root: &Path) -> Result<Project> {
        if root != self.project.root.as_path() {
            return Err(Error::not_found("project", root.display().to_string()));
        }
        Ok(self.project.clone())
    }
}
