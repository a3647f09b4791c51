//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `collect`: Scan source roots, dump generated catalogs, optionally merge
//!   new keys into existing catalogs
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Collect(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that touch the project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; scan, dump and catalog paths are relative to it
    #[arg(long, env = "TRANS_COLLECT_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CollectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Scan the test roots instead of the default roots
    #[arg(long)]
    pub test: bool,

    /// Add the source location of each key to the dump as a comment
    #[arg(long)]
    pub location: bool,

    /// Add missing keys to the existing message catalogs
    #[arg(long)]
    pub append: bool,

    /// Directory to scan (overrides config file, can be repeated)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Generated catalog directory (overrides config file)
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Message catalog directory (overrides config file)
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CollectCommand {
    #[command(flatten)]
    pub args: CollectArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect translation keys from source files into generated catalogs
    Collect(CollectCommand),
    /// Initialize a new .transcollect.json configuration file
    Init,
}
