pub mod filesystem;
pub mod git;
