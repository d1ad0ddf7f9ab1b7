//! `ProjectFilesystem` implementation for `LocalFilesystem`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::domain::{AppError, FileProbe};
use crate::ports::ProjectFilesystem;

use super::LocalFilesystem;

impl ProjectFilesystem for LocalFilesystem {
    fn probe(&self, path: &Path) -> Result<FileProbe, AppError> {
        let full_path = self.resolve_path(path);
        let unreadable = |error: io::Error| AppError::ConfigUnreadable { path: path.to_path_buf(), error };

        let metadata = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileProbe::Absent),
            Err(e) => return Err(unreadable(e)),
        };

        if !metadata.is_file() {
            return Err(unreadable(io::Error::other("not a regular file")));
        }

        File::open(&full_path).map_err(unreadable)?;
        Ok(FileProbe::Present)
    }

    fn copy_new(&self, template: &Path, destination: &Path) -> Result<u64, AppError> {
        let copy_error = |error: io::Error| AppError::TemplateCopy {
            template: template.to_path_buf(),
            destination: destination.to_path_buf(),
            error,
        };
        let destination_path = self.resolve_path(destination);

        let mut reader = File::open(self.resolve_path(template)).map_err(copy_error)?;
        let mut writer = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&destination_path)
            .map_err(copy_error)?;

        match io::copy(&mut reader, &mut writer).and_then(|n| writer.sync_all().map(|_| n)) {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                drop(writer);
                let _ = fs::remove_file(&destination_path);
                Err(copy_error(e))
            }
        }
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(self.resolve_path(path)).map_err(AppError::from)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path)).map_err(AppError::from)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let base = self.resolve_path(dir);
        let mut files = Vec::new();

        for entry in WalkDir::new(&base).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.loop_ancestor().is_some() => {
                    if let Some(path) = e.path() {
                        warn!(path = %path.display(), "skipping symlink loop");
                    }
                    continue;
                }
                Err(e) => return Err(walk_error(e)),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&base) else {
                continue;
            };
            let parts: Vec<String> =
                relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
            files.push(parts.join("/"));
        }

        files.sort();
        Ok(files)
    }

    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let full_path = self.resolve_path(dir);
        if !full_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&full_path).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root().join(path) }
    }
}

fn walk_error(error: walkdir::Error) -> AppError {
    AppError::Io(error.into_io_error().unwrap_or_else(|| io::Error::other("walk failed")))
}
