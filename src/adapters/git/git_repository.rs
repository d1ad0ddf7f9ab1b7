use std::path::PathBuf;

use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Abbreviation length used by `git describe` for commit ids.
const ABBREVIATED_SIZE: u32 = 7;

/// `GitPort` backed by libgit2, discovering the repository upward from `root`.
#[derive(Debug, Clone)]
pub struct GitRepositoryAdapter {
    root: PathBuf,
}

impl GitRepositoryAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.message().to_string(),
        })
    }
}

impl GitPort for GitRepositoryAdapter {
    fn describe(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        let mut options = DescribeOptions::new();
        options.describe_tags().show_commit_oid_as_fallback(true);
        let describe = repo.describe(&options).map_err(|e| AppError::GitError {
            command: "git describe --tags --always".to_string(),
            details: e.message().to_string(),
        })?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(ABBREVIATED_SIZE);
        describe.format(Some(&format)).map_err(|e| AppError::GitError {
            command: "git2::Describe::format".to_string(),
            details: e.message().to_string(),
        })
    }
}
