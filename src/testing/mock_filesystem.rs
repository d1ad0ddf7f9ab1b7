//! In-memory `ProjectFilesystem` for unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, FileProbe};
use crate::ports::ProjectFilesystem;

#[derive(Default)]
pub struct MockFilesystem {
    pub files: Mutex<BTreeMap<String, Vec<u8>>>,
    pub unreadable: Mutex<BTreeSet<String>>,
    pub copies: Mutex<Vec<(String, String)>>,
}

fn key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Mark an existing file as present but unreadable.
    pub fn with_unreadable(self, path: &str, content: &str) -> Self {
        self.unreadable.lock().unwrap().insert(path.to_string());
        self.with_file(path, content)
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn copy_count(&self) -> usize {
        self.copies.lock().unwrap().len()
    }
}

impl ProjectFilesystem for MockFilesystem {
    fn probe(&self, path: &Path) -> Result<FileProbe, AppError> {
        let k = key(path);
        if self.unreadable.lock().unwrap().contains(&k) {
            return Err(AppError::ConfigUnreadable {
                path: path.to_path_buf(),
                error: io::Error::new(io::ErrorKind::PermissionDenied, "Mock permission denied"),
            });
        }
        if self.files.lock().unwrap().contains_key(&k) {
            Ok(FileProbe::Present)
        } else {
            Ok(FileProbe::Absent)
        }
    }

    fn copy_new(&self, template: &Path, destination: &Path) -> Result<u64, AppError> {
        let copy_error = |kind: io::ErrorKind| AppError::TemplateCopy {
            template: template.to_path_buf(),
            destination: destination.to_path_buf(),
            error: io::Error::new(kind, "Mock copy failed"),
        };
        let mut files = self.files.lock().unwrap();
        let content = files.get(&key(template)).cloned().ok_or_else(|| copy_error(io::ErrorKind::NotFound))?;
        if files.contains_key(&key(destination)) {
            return Err(copy_error(io::ErrorKind::AlreadyExists));
        }

        let bytes = content.len() as u64;
        files.insert(key(destination), content);
        self.copies.lock().unwrap().push((key(template), key(destination)));
        Ok(bytes)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.files.lock().unwrap().get(&key(path)).cloned().ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| AppError::from(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn file_exists(&self, path: &Path) -> bool {
        let k = key(path);
        let prefix = format!("{}/", k);
        self.files.lock().unwrap().keys().any(|f| *f == k || f.starts_with(&prefix))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let prefix = format!("{}/", key(path));
        self.files.lock().unwrap().keys().any(|f| f.starts_with(&prefix))
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let prefix = format!("{}/", key(dir));
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter_map(|f| f.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    fn list_dirs(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let prefix = format!("{}/", key(dir));
        let names: BTreeSet<String> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter_map(|f| f.strip_prefix(&prefix))
            .filter_map(|rest| rest.split_once('/').map(|(dir, _)| dir.to_string()))
            .collect();
        Ok(names.into_iter().collect())
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
