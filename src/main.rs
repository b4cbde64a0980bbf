//! `kcfg` binary: read and write KDE config settings by path.
use std::io::Write as _;

use anyhow::Result;
use clap::Parser;

use kcfg::cli::Cli;
use kcfg::commands;
use kcfg::config::AliasTable;
use kcfg::logging;
use kcfg::operations::SystemFileSystemOps;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, args.quiet);

    let mut stdout = std::io::stdout().lock();

    if args.version_api {
        return commands::version::run_api(&mut stdout);
    }

    // An explicit --file works without a config directory.
    let aliases = AliasTable::for_current_user();
    if args.list_configs {
        commands::list::run(&aliases?, &mut stdout)?;
    } else {
        commands::run(&args, aliases.as_ref().ok(), &SystemFileSystemOps, &mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
