use crate::ports::{GitPort, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, G: GitPort> {
    filesystem: F,
    git: G,
}

impl<F: ProjectFilesystem, G: GitPort> AppContext<F, G> {
    /// Create a new application context.
    pub fn new(filesystem: F, git: G) -> Self {
        Self { filesystem, git }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }
}
