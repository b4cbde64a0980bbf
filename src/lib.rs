//! Read and write KDE INI configuration files.
//!
//! `kcfg` replaces `kreadconfig5` / `kwriteconfig5` with a single command that
//! addresses a setting by a slash-separated path such as
//! `kwinrc/Windows/Placement`.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: setting paths, file aliases, and the INI document model
//! - **[`operations`]**: the filesystem seam used by commands
//! - **[`commands`]**: read, write, delete and listing orchestration
//! - **[`cli`]** and **[`logging`]**: argument parsing and console output
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
