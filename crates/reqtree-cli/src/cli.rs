//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use reqtree_tree::ViewMode;

/// reqtree - browse hierarchical requirements documents
#[derive(Parser, Debug)]
#[command(name = "reqtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "REQTREE_CONFIG", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a project and show its document tree
    Open {
        /// Project directory (located automatically when omitted)
        dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Accept documents listed before their parent
        #[arg(long)]
        deferred: bool,
    },

    /// Show the items of one document
    Show {
        /// Document prefix
        prefix: String,

        /// Project directory (located automatically when omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Item view (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<ViewMode>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Accept documents listed before their parent
        #[arg(long)]
        deferred: bool,
    },

    /// Inspect or edit the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `view.mode`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },

    /// Write a default config file
    Init {
        /// Destination (defaults to the standard config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for `open` and `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_open() {
        let cli = Cli::try_parse_from(["reqtree", "open", "reqs", "--deferred"]).unwrap();
        match cli.command {
            Command::Open {
                dir,
                format,
                deferred,
            } => {
                assert_eq!(dir, Some(PathBuf::from("reqs")));
                assert_eq!(format, OutputFormat::Text);
                assert!(deferred);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_with_mode() {
        let cli = Cli::try_parse_from([
            "reqtree", "-vv", "show", "SYS", "--mode", "table", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Show {
                prefix,
                dir,
                mode,
                format,
                deferred,
            } => {
                assert!(!deferred);
                assert_eq!(prefix, "SYS");
                assert_eq!(dir, None);
                assert_eq!(mode, Some(ViewMode::Table));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_deferred() {
        let cli = Cli::try_parse_from(["reqtree", "show", "HLR", "-d", "reqs", "--deferred"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Show { deferred: true, .. }
        ));
    }

    #[test]
    fn test_parse_show_bad_mode() {
        assert!(Cli::try_parse_from(["reqtree", "show", "SYS", "--mode", "grid"]).is_err());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["reqtree", "config", "set", "view.mode", "table"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Set { .. }
            }
        ));
    }
}
