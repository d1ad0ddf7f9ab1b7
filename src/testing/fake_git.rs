use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// `GitPort` returning a canned description, or failing when none is set.
#[derive(Default)]
pub struct FakeGit {
    pub description: Mutex<Option<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(description: &str) -> Self {
        Self { description: Mutex::new(Some(description.to_string())) }
    }
}

impl GitPort for FakeGit {
    fn describe(&self) -> Result<String, AppError> {
        self.description.lock().unwrap().clone().ok_or_else(|| AppError::GitError {
            command: "git describe --tags --always".to_string(),
            details: "not a git repository".to_string(),
        })
    }
}
