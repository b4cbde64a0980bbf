//! Command orchestration: validate the request, load the file, dispatch.
pub mod delete;
pub mod list;
pub mod read;
pub mod version;
pub mod write;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::cli::{Cli, Operation};
use crate::config::{AliasTable, Document, KeyPath, ini};
use crate::error::{ConfigError, KcfgError};
use crate::logging::DRY_RUN_TARGET;
use crate::operations::FileSystemOps;

/// A validated request: which key, in which file, doing what.
///
/// Built before any file is touched, so path syntax errors, unknown aliases
/// and conflicting flags abort without I/O.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The path argument exactly as given, for messages.
    pub raw_path: String,
    /// Parsed path.
    pub key_path: KeyPath,
    /// Config file to operate on.
    pub file: PathBuf,
    /// Requested operation.
    pub operation: Operation,
    /// Print instead of writing.
    pub dry_run: bool,
}

impl Invocation {
    /// Validate the command line and resolve the target file.
    ///
    /// The file is chosen from, in order: the alias embedded in the path,
    /// `--file`, then the default file. An alias in the path overrides
    /// `--file`, with a warning. `aliases` is `None` when the user config
    /// directory is unknown; that only matters if it is actually consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed, `--write` and `--delete`
    /// are combined, the path alias is unknown, or an alias or the default
    /// file is needed without a config directory.
    pub fn prepare(
        raw_path: &str,
        cli: &Cli,
        aliases: Option<&AliasTable>,
    ) -> Result<Self, KcfgError> {
        let key_path = KeyPath::parse(raw_path)?;
        let operation = cli.operation()?;
        let file = resolve_file(&key_path, cli.file.as_deref(), aliases)?;

        Ok(Self {
            raw_path: raw_path.to_string(),
            key_path,
            file,
            operation,
            dry_run: cli.dry_run,
        })
    }

    /// Section header addressed by the path.
    #[must_use]
    pub fn section(&self) -> String {
        self.key_path.section()
    }

    /// Key addressed by the path.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key_path.key
    }
}

/// Pick the config file for `key_path`.
fn resolve_file(
    key_path: &KeyPath,
    explicit: Option<&Path>,
    aliases: Option<&AliasTable>,
) -> Result<PathBuf, ConfigError> {
    match (&key_path.alias, explicit) {
        (Some(alias), explicit) => {
            if explicit.is_some() {
                tracing::warn!("File already provided in path, --file argument is ignored");
            }
            aliases
                .ok_or(ConfigError::NoConfigDir)?
                .resolve(alias)
                .map(Path::to_path_buf)
                .ok_or_else(|| ConfigError::UnknownAlias {
                    alias: alias.clone(),
                })
        }
        (None, Some(file)) => Ok(file.to_path_buf()),
        (None, None) => {
            let file = aliases.ok_or(ConfigError::NoConfigDir)?.default_file();
            tracing::info!("No file provided, defaulting to '{}'", file.display());
            Ok(file.to_path_buf())
        }
    }
}

/// Run a read, write or delete for the parsed command line.
///
/// Results (the value read, or the dry-run rendering) are written to `out`;
/// everything else is logged. See [`Invocation::prepare`] for `aliases`.
///
/// # Errors
///
/// Returns an error if the invocation is invalid, or the config file cannot
/// be read, parsed or written.
pub fn run(
    cli: &Cli,
    aliases: Option<&AliasTable>,
    fs: &dyn FileSystemOps,
    out: &mut dyn Write,
) -> Result<()> {
    if cli.dry_run {
        tracing::info!(target: DRY_RUN_TARGET, "Dry run enabled");
    }

    let raw_path = cli
        .path
        .as_deref()
        .context("a setting path is required")?;
    let inv = Invocation::prepare(raw_path, cli, aliases)?;
    tracing::debug!(
        "file: {}, section: [{}], key: {}",
        inv.file.display(),
        inv.section(),
        inv.key()
    );

    let doc = ini::load(fs, &inv.file)
        .with_context(|| format!("loading {}", inv.file.display()))?;

    match &inv.operation {
        Operation::Read => read::run(&inv, &doc, out),
        Operation::Write(value) => write::run(&inv, doc, value, fs, out),
        Operation::Delete => delete::run(&inv, doc, fs, out),
    }
}

/// Save a modified document, or print it when dry-running.
///
/// # Errors
///
/// Returns an error if the file or `out` cannot be written.
pub fn persist(
    inv: &Invocation,
    doc: &Document,
    fs: &dyn FileSystemOps,
    out: &mut dyn Write,
) -> Result<()> {
    if inv.dry_run {
        tracing::info!(target: DRY_RUN_TARGET, "would write '{}'", inv.file.display());
        writeln!(out, "{}", ini::render(doc))?;
        return Ok(());
    }
    ini::save(fs, &inv.file, doc).with_context(|| format!("writing {}", inv.file.display()))
}
