//! Command: print the machine-readable version.
use std::io::Write;

use anyhow::Result;

/// Crate version with the dots removed, e.g. `0.1.1` becomes `011`.
#[must_use]
pub fn api_version() -> String {
    env!("CARGO_PKG_VERSION").replace('.', "")
}

/// Print [`api_version`] to `out`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_api(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", api_version())?;
    Ok(())
}
