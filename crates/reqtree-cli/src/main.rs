//! reqtree
//!
//! Browse hierarchical requirements documents from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use reqtree_cli::{Cli, ConfigManager, ReqtreeConfig, commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ReqtreeConfig::load(cli.config.as_deref()).context("loading configuration")?;
    logging::init(cli.verbose, &config.logging.level)?;

    commands::run(cli, &config)?;
    Ok(())
}
