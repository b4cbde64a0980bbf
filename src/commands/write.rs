//! Write command implementation.
use std::io::Write;

use anyhow::Result;

use super::{Invocation, persist};
use crate::config::Document;
use crate::operations::FileSystemOps;

/// Store `value` at the invocation's path and save the file.
///
/// The section is created if needed; other keys are kept as they are.
///
/// # Errors
///
/// Returns an error if the file (or, when dry-running, `out`) cannot be
/// written.
pub fn run(
    inv: &Invocation,
    mut doc: Document,
    value: &str,
    fs: &dyn FileSystemOps,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::info!(
        "Setting '{}' to '{value}' in '{}'",
        inv.raw_path,
        inv.file.display()
    );

    if let Some(previous) = doc.set(&inv.section(), inv.key(), value) {
        tracing::info!("Value was '{previous}'");
    }

    persist(inv, &doc, fs, out)
}
