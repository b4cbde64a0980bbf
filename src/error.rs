//! Domain-specific error types for kcfg.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Library modules return typed errors (e.g., [`PathError`], [`ConfigError`])
//! while command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! KcfgError
//! ├── Path(PathError)     : malformed setting path argument
//! ├── Config(ConfigError) : alias lookup, INI syntax, file I/O
//! └── Usage(UsageError)   : conflicting command-line options
//! ```
//!
//! Missing files, sections and keys are not errors; the key-value API reports
//! them as `None`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for kcfg.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum KcfgError {
    /// The setting path could not be parsed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A config file could not be located, read, parsed or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The command-line options contradict each other.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// Errors produced while parsing a `file/group/.../key` path.
///
/// Every variant carries the path after slash normalisation, which is what
/// the message displays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path contains no `/` separator at all.
    #[error("Invalid path '{path}'")]
    Invalid {
        /// Normalised path.
        path: String,
    },

    /// The path is only a file alias followed by a slash.
    #[error("Invalid path '{path}', missing both group and key")]
    MissingGroupAndKey {
        /// Normalised path.
        path: String,
    },

    /// The path has no group in front of the key.
    #[error("Invalid path '{path}', missing the key")]
    MissingKey {
        /// Normalised path.
        path: String,
    },

    /// A group between two slashes is blank.
    #[error("Invalid path '{path}', group names cannot be blank")]
    EmptyGroup {
        /// Normalised path.
        path: String,
    },

    /// A group or key contains characters that an INI line cannot hold.
    #[error("Invalid path '{path}', name cannot be stored in an INI file")]
    UnstorableName {
        /// Normalised path.
        path: String,
    },
}

/// Errors that arise from locating, reading and writing config files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The alias embedded in the path is not a known config file.
    #[error("Unknown config file alias '{alias}', use --file to pass an explicit path")]
    UnknownAlias {
        /// Alias as given on the command line.
        alias: String,
    },

    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("Cannot locate the user config directory: neither XDG_CONFIG_HOME nor HOME is set")]
    NoConfigDir,

    /// The INI content contains a line that cannot be parsed.
    #[error("Invalid INI syntax at line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// An I/O error occurred while reading or writing a config file.
    #[error("IO error on config file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from contradictory command-line options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `--write` and `--delete` were given together.
    #[error("Argument --delete and --write cannot be used together")]
    ConflictingOperations,
}
