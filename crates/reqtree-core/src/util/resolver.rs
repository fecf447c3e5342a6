//! Project directory resolution.
//!
//! `ProjectLocator` finds the requirements project to open when none is
//! given explicitly, using an environment variable, directory markers,
//! and an optional fallback path.
//!
//! # Example
//!
//! ```no_run
//! use reqtree_core::util::resolver::ProjectLocator;
//!
//! // Checks REQTREE_PROJECT_DIR, then walks up from the current directory.
//! let locator = ProjectLocator::new("reqtree")
//!     .with_project_markers(&[".git", ".doorstop.yml"]);
//!
//! if let Some(root) = locator.project_root() {
//!     println!("Project: {}", root.display());
//! }
//! ```

use std::env;
use std::path::PathBuf;

use crate::util::paths::{expand_tilde, find_dir_with_marker};

/// Configurable locator for a requirements project root.
#[derive(Debug, Clone)]
pub struct ProjectLocator {
    /// Application name (e.g., "reqtree")
    app_name: String,
    /// Environment variable prefix (e.g., "REQTREE")
    env_prefix: String,
    /// Marker files identifying a project root, tried in order
    project_markers: Vec<String>,
    /// Directory the upward search starts from (defaults to the cwd)
    start_dir: Option<PathBuf>,
    /// Fallback project root (expanded with tilde)
    project_fallback: Option<PathBuf>,
}

impl ProjectLocator {
    /// Create a new locator for the given application name.
    ///
    /// The name is converted to an environment variable prefix:
    /// - "reqtree" → "REQTREE"
    /// - "req-tree" → "REQ_TREE"
    pub fn new(app_name: &str) -> Self {
        let env_prefix = app_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            app_name: app_name.to_string(),
            env_prefix,
            project_markers: vec![],
            start_dir: None,
            project_fallback: None,
        }
    }

    /// Set marker files that identify the project root.
    pub fn with_project_markers(mut self, markers: &[&str]) -> Self {
        self.project_markers = markers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Start the upward search from `dir` instead of the current directory.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Set a fallback project root (supports ~ expansion).
    pub fn with_project_fallback(mut self, path: &str) -> Self {
        self.project_fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use reqtree_core::util::resolver::ProjectLocator;
    ///
    /// let locator = ProjectLocator::new("reqtree");
    /// assert_eq!(locator.env_var("PROJECT_DIR"), "REQTREE_PROJECT_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the project root directory.
    ///
    /// Checks in order:
    /// 1. `{APP}_PROJECT_DIR` environment variable
    /// 2. Walk up from the start directory, trying each marker
    /// 3. Fallback path (if configured)
    pub fn project_root(&self) -> Option<PathBuf> {
        let env_var = self.env_var("PROJECT_DIR");
        if let Ok(path) = env::var(&env_var) {
            let path = expand_tilde(&path);
            if path.is_dir() {
                log::debug!("Project root from {env_var}: {}", path.display());
                return Some(path);
            }
            log::warn!("{env_var} points to a missing directory: {}", path.display());
        }

        let start = self.start_dir.clone().or_else(|| env::current_dir().ok());
        if let Some(start) = start {
            for marker in &self.project_markers {
                if let Some(root) = find_dir_with_marker(&start, marker) {
                    log::debug!("Project root via marker {marker}: {}", root.display());
                    return Some(root);
                }
            }
        }

        if let Some(fallback) = &self.project_fallback {
            if fallback.is_dir() {
                return Some(fallback.clone());
            }
        }

        None
    }

    /// Get the application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
