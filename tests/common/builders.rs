//! Test builders — result directories laid out the way the test runner
//! leaves them.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// ResultDirBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a temporary result directory.
///
/// # Example
///
/// ```rust
/// let results = ResultDirBuilder::new()
///     .file("run1/GCC.log", GCC_COLORED)
///     .file("run2/Clang.log", CLANG_COLORED)
///     .build();
/// ```
pub struct ResultDirBuilder {
    root: TempDir,
}

impl ResultDirBuilder {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp result dir"),
        }
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture file");
        self
    }

    /// Create an empty directory at `rel`.
    pub fn dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root.path().join(rel)).expect("create dir");
        self
    }

    pub fn build(self) -> ResultDir {
        ResultDir { root: self.root }
    }
}

/// A built result directory. Removed from disk on drop.
pub struct ResultDir {
    root: TempDir,
}

impl ResultDir {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    pub fn read(&self, rel: &str) -> Vec<u8> {
        std::fs::read(self.join(rel)).unwrap_or_else(|e| panic!("read {rel}: {e}"))
    }
}
