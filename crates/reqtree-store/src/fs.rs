//! Filesystem-backed requirements store.
//!
//! Every directory below the project root that contains a settings file
//! (`.doorstop.yml` by default) is a document; the other YAML files in that
//! directory are its items. Nested document directories are discovered
//! independently, so a child document may live inside its parent's
//! directory or anywhere else under the root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use reqtree_core::{normalize_prefix, split_uid, uid_from_path, Error, Result};

use crate::format::{parse_item, parse_settings};
use crate::model::{Document, Item, Project};
use crate::RequirementsStore;

/// Default name of a document settings file.
pub const DEFAULT_SETTINGS_FILE: &str = ".doorstop.yml";

/// Default item file extension.
pub const DEFAULT_ITEM_EXTENSION: &str = "yml";

// ============================================================================
// Store options
// ============================================================================

/// Options controlling how a [`FileStore`] reads a project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// File that marks a directory as a document.
    pub settings_file: String,
    /// Extension of item files (without the dot).
    pub item_extension: String,
    /// Keep items whose `active` flag is false.
    pub include_inactive: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            settings_file: DEFAULT_SETTINGS_FILE.to_string(),
            item_extension: DEFAULT_ITEM_EXTENSION.to_string(),
            include_inactive: false,
        }
    }
}

// ============================================================================
// FileStore
// ============================================================================

/// Reads a project tree from disk.
#[derive(Clone, Debug, Default)]
pub struct FileStore {
    options: StoreOptions,
}

impl FileStore {
    /// Creates a store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Find all document settings files below `root`, sorted by path.
    fn discover_documents(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = format!("{escaped_root}/**/{}", self.options.settings_file);

        let entries = glob::glob(&pattern)
            .map_err(|e| Error::parse(format!("Invalid discovery pattern '{pattern}': {e}")))?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => log::warn!("Skipping unreadable path during discovery: {e}"),
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Load a single document from its settings file.
    fn load_document(&self, settings_path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(settings_path)
            .map_err(|e| Error::io_with_path(e, settings_path))?;
        let settings = parse_settings(&content, settings_path)?;

        let prefix = normalize_prefix(&settings.prefix).ok_or_else(|| {
            Error::parse(format!(
                "Invalid document settings {}: empty prefix",
                settings_path.display()
            ))
        })?;
        let parent = settings.parent.as_deref().and_then(normalize_prefix);

        let dir = settings_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let items = self.load_items(&dir)?;

        log::debug!(
            "Loaded document {prefix} ({} items) from {}",
            items.len(),
            dir.display()
        );

        let mut document = Document::new(prefix).with_path(dir);
        document.parent = parent;
        document.items = items;
        Ok(document)
    }

    /// Load, filter, and order the items of one document directory.
    fn load_items(&self, dir: &Path) -> Result<Vec<Item>> {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io_with_path(e, dir))?;
            let path = entry.path();
            if self.is_item_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut items = Vec::with_capacity(files.len());
        for path in files {
            let Some(uid) = uid_from_path(&path) else {
                continue;
            };
            let content =
                std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
            let item = parse_item(&uid, &content, &path)?;

            if !item.active && !self.options.include_inactive {
                log::debug!("Skipping inactive item {uid}");
                continue;
            }
            items.push(item);
        }

        items.sort_by(|a, b| {
            a.level
                .cmp(&b.level)
                .then_with(|| uid_number(&a.uid).cmp(&uid_number(&b.uid)))
                .then_with(|| a.uid.cmp(&b.uid))
        });
        Ok(items)
    }

    fn is_item_file(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        let is_settings = path
            .file_name()
            .is_some_and(|name| name == self.options.settings_file.as_str());
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext == self.options.item_extension.as_str());
        !is_settings && has_extension
    }
}

fn uid_number(uid: &str) -> u32 {
    split_uid(uid).map(|(_, number)| number).unwrap_or(0)
}

impl RequirementsStore for FileStore {
    fn build(&self, root: &Path) -> Result<Project> {
        if !root.is_dir() {
            return Err(Error::not_found("project", root.display().to_string()));
        }

        let mut project = Project::new(root);
        let mut seen = HashSet::new();

        for settings_path in self.discover_documents(root)? {
            let document = self.load_document(&settings_path)?;
            if !seen.insert(document.prefix.clone()) {
                return Err(Error::parse(format!(
                    "Duplicate document prefix '{}' in {}",
                    document.prefix,
                    settings_path.display()
                )));
            }
            project.documents.push(document);
        }

        log::info!(
            "Loaded {} documents ({} items) from {}",
            project.documents.len(),
            project.item_count(),
            root.display()
        );
        Ok(project)
    }
}

// ============================================================================
// Tests
// ============================================================================
