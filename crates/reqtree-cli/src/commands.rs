//! Command execution.
//!
//! Each command builds its output as a `String` so the rendering can be
//! tested without capturing stdout; [`run`] prints it.

use std::path::{Path, PathBuf};

use reqtree_core::ProjectLocator;
use reqtree_store::FileStore;
use reqtree_tree::ViewMode;

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::ReqtreeConfig;
use crate::config_handlers;
use crate::error::Result;
use crate::render;
use crate::session::Session;

/// Markers that identify a requirements project root, nearest first.
pub const PROJECT_MARKERS: &[&str] = &[".doorstop.yml", ".git"];

/// Execute a parsed command line.
pub fn run(cli: Cli, config: &ReqtreeConfig) -> Result<()> {
    match cli.command {
        Command::Open {
            dir,
            format,
            deferred,
        } => {
            let dir = locate_project(dir.as_deref());
            print!("{}", open(config, dir.as_deref(), format, deferred)?);
        }
        Command::Show {
            prefix,
            dir,
            mode,
            format,
            deferred,
        } => {
            let dir = locate_project(dir.as_deref());
            let options = ShowOptions {
                mode,
                format,
                deferred,
            };
            print!("{}", show(config, dir.as_deref(), &prefix, options)?);
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action)?;
        }
    }
    Ok(())
}

/// The given directory, or the nearest project root above the working
/// directory.
pub fn locate_project(dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir {
        return Some(dir.to_path_buf());
    }
    let root = ProjectLocator::new("reqtree")
        .with_project_markers(PROJECT_MARKERS)
        .project_root();
    match &root {
        Some(path) => log::debug!("Located project at {}", path.display()),
        None => log::debug!("No project located"),
    }
    root
}

/// Open the project at `dir` and render its document tree.
///
/// Without a directory nothing is loaded and the session status is
/// returned instead.
pub fn open(
    config: &ReqtreeConfig,
    dir: Option<&Path>,
    format: OutputFormat,
    deferred: bool,
) -> Result<String> {
    let mut session = new_session(config, config.view.mode, deferred);
    if !session.open_project(&store(config), dir)? {
        return Ok(status_line(&session));
    }

    match format {
        OutputFormat::Text => Ok(render::documents_text(session.documents())),
        OutputFormat::Json => render::documents_json(session.documents()),
    }
}

/// Per-invocation settings for [`show`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ShowOptions {
    /// Item view, overriding the configured mode.
    pub mode: Option<ViewMode>,
    /// Output format.
    pub format: OutputFormat,
    /// Accept documents listed before their parent.
    pub deferred: bool,
}

/// Open the project at `dir` and render one document's items.
pub fn show(
    config: &ReqtreeConfig,
    dir: Option<&Path>,
    prefix: &str,
    options: ShowOptions,
) -> Result<String> {
    let mode = options.mode.unwrap_or(config.view.mode);
    let mut session = new_session(config, mode, options.deferred);
    if !session.open_project(&store(config), dir)? {
        return Ok(status_line(&session));
    }

    let view = session.select_document(prefix)?;
    match options.format {
        OutputFormat::Text => Ok(render::item_view_text(view)),
        OutputFormat::Json => render::item_view_json(view),
    }
}

fn new_session(config: &ReqtreeConfig, mode: ViewMode, deferred: bool) -> Session {
    Session::new(mode).with_deferred_documents(deferred || config.view.deferred_documents)
}

fn store(config: &ReqtreeConfig) -> FileStore {
    FileStore::with_options(config.store.store_options())
}

fn status_line(session: &Session) -> String {
    format!("{}\n", session.status())
}
