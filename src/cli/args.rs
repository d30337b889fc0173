//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Family tree toolkit: build genealogies from lineage files and query common ancestors
#[derive(Parser, Debug)]
#[command(name = "kintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output. Repeat for more verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(short, long, value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree, one name per line, indented by generation
    Show {
        /// Lineage file (interactive selection if omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the tree with branch guides and a summary line
    Tree {
        /// Lineage file (interactive selection if omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Find the most recent common ancestor of two people
    Mrca {
        /// First person
        name1: String,
        /// Second person
        name2: String,
        /// Lineage file (interactive selection if omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// List a person's ancestors, most recent first
    Ancestors {
        /// Person to look up
        name: String,
        /// Lineage file (interactive selection if omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// List people with no recorded children
    Leaves {
        /// Lineage file (interactive selection if omitted)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
