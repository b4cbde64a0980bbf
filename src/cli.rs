//! Command-line argument definitions.
use std::path::PathBuf;

use clap::Parser;

use crate::error::UsageError;

/// Top-level CLI entry point for kcfg.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "kcfg",
    about = "Read and write KDE INI config files, a replacement for kreadconfig5 / kwriteconfig5",
    version,
    after_help = "\
Examples:
    $ kcfg '/Group 1/Group 2/Key'

        Which is equivalent to

    $ kreadconfig5 --group 'Group 1' --group 'Group 2' --key 'Key'

        You could also specify a config alias like

    $ kcfg 'kcminputrc/Group 1/Group 2/Key' which would use ~/.config/kcminputrc

        Alternatively specify the file directly

    $ kcfg --file ~/.config/kcminputrc '/Group 1/Group 2/Key'

        To write to a file just add --write value

    $ kcfg --file ~/.config/kcminputrc '/Group 1/Group 2/Key' --write true"
)]
pub struct Cli {
    /// Setting path: [alias]/group/[group/...]/key
    #[arg(required_unless_present_any = ["list_configs", "version_api"])]
    pub path: Option<String>,

    /// Config file to use when the path has no alias
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the following value verbatim
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub write: Option<String>,

    /// Delete the key if it exists
    #[arg(long)]
    pub delete: bool,

    /// Print the resulting file instead of writing it; reads are unaffected
    #[arg(long)]
    pub dry_run: bool,

    /// Only print results and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the version without dots and exit
    #[arg(long)]
    pub version_api: bool,

    /// List all known config files and exit
    #[arg(short, long)]
    pub list_configs: bool,
}

/// What to do with the addressed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Print the current value.
    Read,
    /// Store a new value.
    Write(String),
    /// Remove the key.
    Delete,
}

impl Cli {
    /// The operation selected by `--write` / `--delete`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ConflictingOperations`] if both flags are present.
    pub fn operation(&self) -> Result<Operation, UsageError> {
        match (&self.write, self.delete) {
            (Some(_), true) => Err(UsageError::ConflictingOperations),
            (Some(value), false) => Ok(Operation::Write(value.clone())),
            (None, true) => Ok(Operation::Delete),
            (None, false) => Ok(Operation::Read),
        }
    }
}
