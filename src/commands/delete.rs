//! Delete command implementation.
use std::io::Write;

use anyhow::Result;

use super::{Invocation, persist};
use crate::config::Document;
use crate::operations::FileSystemOps;

/// Remove the key at the invocation's path and save the file.
///
/// When the section or key does not exist the file is left untouched: it is
/// not rewritten and nothing is printed, even when dry-running.
///
/// # Errors
///
/// Returns an error if the file (or, when dry-running, `out`) cannot be
/// written.
pub fn run(
    inv: &Invocation,
    mut doc: Document,
    fs: &dyn FileSystemOps,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::info!("Deleting '{}' in '{}'", inv.raw_path, inv.file.display());

    let Some(previous) = doc.delete(&inv.section(), inv.key()) else {
        tracing::debug!("nothing to delete, leaving '{}' untouched", inv.file.display());
        return Ok(());
    };
    tracing::info!("Value was '{previous}'");

    persist(inv, &doc, fs, out)
}
