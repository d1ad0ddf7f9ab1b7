mod git;
mod project_filesystem;

pub use git::GitPort;
pub use project_filesystem::ProjectFilesystem;
