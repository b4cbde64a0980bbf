//! Command: list the config files reachable through an alias.
use std::io::Write;

use anyhow::Result;

use crate::config::AliasTable;

/// Print every aliased config file, one indented path per line.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(aliases: &AliasTable, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Config files that are known:")?;
    for (_, path) in aliases.iter() {
        writeln!(out, "  {}", path.display())?;
    }
    Ok(())
}
