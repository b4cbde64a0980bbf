// Shared helpers for integration tests.
//
// Provides a temporary config directory and a fluent builder so each
// integration test can lay out KDE config files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use clap::Parser;
use kcfg::cli::Cli;
use kcfg::config::AliasTable;
use kcfg::operations::SystemFileSystemOps;

/// Alias registered by every context, pointing at `testfile` in the config
/// directory.
pub const TEST_ALIAS: &str = "__testfile";

/// Contents of the file used by most tests.
pub const EXAMPLE_CONFIG_TEXT: &str = "[Group 1][Group 2][Group 3]\nKey1=One\nKey2=Two\n";

/// An isolated config directory backed by a [`tempfile::TempDir`].
///
/// The directory is deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory standing in for `~/.config`.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context with an empty config directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        Self { root }
    }

    /// Path to the config directory.
    pub fn config_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path of `name` inside the config directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Contents of `name`, or `None` if it does not exist.
    pub fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.file(name)).ok()
    }

    /// Alias table rooted at the config directory, with [`TEST_ALIAS`] added.
    pub fn aliases(&self) -> AliasTable {
        AliasTable::new(self.config_dir()).with_entry(TEST_ALIAS, self.file("testfile"))
    }

    /// Run `kcfg` in-process with `args` and return its stdout.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("kcfg").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        kcfg::commands::run(&cli, Some(&self.aliases()), &SystemFileSystemOps, &mut out)?;
        Ok(String::from_utf8(out).expect("stdout should be UTF-8"))
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a context with an empty config directory.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `<config dir>/<name>`.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.ctx.file(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write config file");
        self
    }

    /// Write [`EXAMPLE_CONFIG_TEXT`] to the file behind [`TEST_ALIAS`].
    pub fn with_example_testfile(self) -> Self {
        self.with_file("testfile", EXAMPLE_CONFIG_TEXT)
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
