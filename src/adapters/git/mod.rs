mod git_repository;

pub use git_repository::GitRepositoryAdapter;
