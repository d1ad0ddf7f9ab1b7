//! Filesystem adapter implementation for `ProjectFilesystem`.

mod project_filesystem;

use std::path::{Path, PathBuf};

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
