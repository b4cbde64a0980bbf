//! Read command implementation.
use std::io::Write;

use anyhow::Result;

use super::Invocation;
use crate::config::Document;

/// Print the value at the invocation's path.
///
/// A missing file, section or key is not an error: nothing is printed to
/// `out` and an informational message is logged instead.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(inv: &Invocation, doc: &Document, out: &mut dyn Write) -> Result<()> {
    if doc.is_empty() {
        tracing::info!("File '{}' is empty or does not exist", inv.file.display());
        return Ok(());
    }

    match doc.get(&inv.section(), inv.key()) {
        Some(value) => writeln!(out, "{value}")?,
        None => tracing::info!(
            "Path '{}' not found in '{}'",
            inv.raw_path,
            inv.file.display()
        ),
    }
    Ok(())
}
