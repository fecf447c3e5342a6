//! # reqtree-cli
//!
//! Command-line front-end for browsing requirements projects.
//!
//! - `open` loads a project and prints its document hierarchy
//! - `show` prints one document's items as a tree or a table
//! - `config` inspects and edits the TOML configuration file
//!
//! The [`session::Session`] type holds the browsing state independently of
//! any output, so other front-ends can drive it directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;

pub use cli::{Cli, Command, ConfigAction, OutputFormat};
pub use config::{ConfigManager, ReqtreeConfig};
pub use error::{Error, Result};
pub use session::{NO_REQUIREMENTS_LOADED, Session};
