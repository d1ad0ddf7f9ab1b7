mod fake_git;
mod mock_filesystem;

pub use fake_git::FakeGit;
pub use mock_filesystem::MockFilesystem;
