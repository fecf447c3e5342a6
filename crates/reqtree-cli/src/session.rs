//! Headless browsing session.
//!
//! A [`Session`] holds everything a requirements browser window shows: the
//! document tree, a materialized item view per document, the selected
//! document, and a status message. Opening a project replaces all of it at
//! once; a failed or dismissed open leaves the previous state untouched.

use std::path::Path;

use reqtree_core::{Error, Result};
use reqtree_store::{Project, RequirementsStore};
use reqtree_tree::{DocumentTree, ItemView, ViewMode, ViewRegistry};

/// Status shown in the status bar.
pub const NO_REQUIREMENTS_LOADED: &str = "No Requirements Loaded";

/// State of one browsing session.
#[derive(Debug)]
pub struct Session {
    status: String,
    mode: ViewMode,
    deferred_documents: bool,
    project: Option<Project>,
    documents: DocumentTree,
    views: ViewRegistry,
    selected: Option<String>,
}

impl Session {
    /// Creates an empty session showing items in `mode`.
    pub fn new(mode: ViewMode) -> Self {
        Self {
            status: NO_REQUIREMENTS_LOADED.to_string(),
            mode,
            deferred_documents: false,
            project: None,
            documents: DocumentTree::new(),
            views: ViewRegistry::new(),
            selected: None,
        }
    }

    /// Accept documents that appear before their parent.
    pub fn with_deferred_documents(mut self, deferred: bool) -> Self {
        self.deferred_documents = deferred;
        self
    }

    /// Open the project at `dir` through `store`.
    ///
    /// `None` stands for a dismissed directory picker: nothing changes and
    /// `Ok(false)` is returned. On success every document's item view is
    /// built up front and `Ok(true)` is returned.
    pub fn open_project(
        &mut self,
        store: &impl RequirementsStore,
        dir: Option<&Path>,
    ) -> Result<bool> {
        let Some(dir) = dir else {
            log::debug!("Open project dismissed");
            return Ok(false);
        };

        let project = store.build(dir)?;
        let documents = if self.deferred_documents {
            DocumentTree::assemble_deferred(&project.documents)?
        } else {
            DocumentTree::assemble(&project.documents)?
        };
        let views = ViewRegistry::build(&project.documents, self.mode)?;

        log::info!(
            "Opened {} ({} documents)",
            project.root.display(),
            documents.len()
        );

        self.project = Some(project);
        self.documents = documents;
        self.views = views;
        self.selected = None;
        Ok(true)
    }

    /// Select a document and return its item view.
    pub fn select_document(&mut self, prefix: &str) -> Result<&ItemView> {
        let view = self
            .views
            .get(prefix)
            .ok_or_else(|| Error::not_found("document", prefix))?;
        self.selected = Some(prefix.to_string());
        Ok(view)
    }

    /// The status bar message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The item view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The loaded project, if any.
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// The document tree (empty before a project is opened).
    pub fn documents(&self) -> &DocumentTree {
        &self.documents
    }

    /// Item views keyed by prefix.
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// The selected document prefix.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The item view of the selected document.
    pub fn selected_view(&self) -> Option<&ItemView> {
        self.selected.as_deref().and_then(|prefix| self.views.get(prefix))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}
