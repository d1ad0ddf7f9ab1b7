//! Project-level filesystem operations.
//!
//! All `path` arguments are relative to the project root unless absolute.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, FileProbe};

pub trait ProjectFilesystem {
    /// Classify a destination file as absent or present.
    ///
    /// Fails with `ConfigUnreadable` when the path exists but cannot be opened
    /// for reading, or is not a regular file.
    fn probe(&self, path: &Path) -> Result<FileProbe, AppError>;

    /// Copy `template` to a new file at `destination`, returning bytes written.
    ///
    /// Never overwrites: fails if `destination` appeared since it was probed.
    /// A partially written destination is removed before returning the error.
    fn copy_new(&self, template: &Path, destination: &Path) -> Result<u64, AppError>;

    /// Read a file's raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Check whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List regular files under `dir` recursively.
    ///
    /// Paths are relative to `dir`, `/`-separated, and sorted.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// List names of immediate subdirectories of `dir`, sorted.
    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Resolve a relative path against the project root.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
