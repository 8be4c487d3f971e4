//! Common test utilities for integration tests.

use pathlib::PathValue;
use tempfile::TempDir;

/// A scratch directory that is removed when dropped, with its path value.
pub struct Sandbox {
    _dir: TempDir,
    /// The sandbox root.
    pub root: PathValue,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = PathValue::new(dir.path());
        Self { _dir: dir, root }
    }

    /// Writes `contents` to `rel` under the root, creating directories.
    #[allow(dead_code)]
    pub fn write(&self, rel: &str, contents: &[u8]) -> PathValue {
        let file = self.root.create(rel).unwrap();
        std::fs::write(&file, contents).unwrap();
        file
    }
}
