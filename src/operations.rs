//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that commands can be unit-tested
//! without touching the real filesystem.  Production code uses
//! [`SystemFileSystemOps`]; tests use `MockFileSystemOps`.

use std::io;
use std::path::Path;

/// Abstraction over the file reads and writes performed by commands.
///
/// Implement this trait to swap in a mock during unit tests, keeping command
/// logic independent of real I/O.  The production implementation is
/// [`SystemFileSystemOps`].
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Read the file at `path` as UTF-8 text.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn read(&self, path: &Path) -> io::Result<Option<String>>;

    /// Replace the contents of `path` with `contents`, creating the file and
    /// its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }
}

/// Mock [`FileSystemOps`] for unit tests.
///
/// Pre-configure file contents with [`with_file`](Self::with_file), run the
/// code under test, then inspect what was written.
///
/// # Example
///
/// ```ignore
/// use kcfg::operations::MockFileSystemOps;
///
/// let fs = MockFileSystemOps::new().with_file("/cfg/kwinrc", "[Windows]\nPlacement=Smart\n");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    files: std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    writes: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl MockFileSystemOps {
    /// Create an empty mock with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file at `path` with the given contents.
    #[must_use]
    pub fn with_file(self, path: impl Into<std::path::PathBuf>, contents: &str) -> Self {
        self.files
            .lock()
            .expect("mock files poisoned")
            .insert(path.into(), contents.to_string());
        self
    }

    /// Current contents of `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .expect("mock files poisoned")
            .get(path)
            .cloned()
    }

    /// Number of [`FileSystemOps::write`] calls made so far.
    pub fn write_count(&self) -> usize {
        self.writes.lock().expect("mock writes poisoned").len()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl FileSystemOps for MockFileSystemOps {
    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.contents(path))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.writes
            .lock()
            .expect("mock writes poisoned")
            .push(path.to_path_buf());
        self.files
            .lock()
            .expect("mock files poisoned")
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
