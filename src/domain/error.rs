use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for uhal-tools operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file name is invalid.
    #[error(
        "Invalid configuration file name '{0}': must be a plain file name (alphanumeric, hyphens, underscores, periods)"
    )]
    InvalidConfigFileName(String),

    /// Copying a template into place failed.
    #[error("Failed to copy {} to {}: {error}", .template.display(), .destination.display())]
    TemplateCopy {
        template: PathBuf,
        destination: PathBuf,
        #[source]
        error: io::Error,
    },

    /// A configuration file exists but cannot be read.
    #[error("Configuration file {} exists but is not readable: {error}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Platform identifier is invalid.
    #[error("Invalid platform '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidPlatform(String),

    /// Platform has no source directory.
    #[error("Platform '{name}' not found. Available: {available}")]
    UnknownPlatform { name: String, available: String },

    /// Preprocessor define could not be parsed.
    #[error("Invalid define '{0}': expected NAME or NAME=VALUE")]
    InvalidDefine(String),

    /// Build date could not be parsed.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Parse or serialization error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TemplateCopy { error, .. } | AppError::ConfigUnreadable { error, .. } => {
                error.kind()
            }
            AppError::Configuration(_)
            | AppError::InvalidConfigFileName(_)
            | AppError::InvalidPlatform(_)
            | AppError::InvalidDefine(_)
            | AppError::InvalidDate(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::UnknownPlatform { .. } => io::ErrorKind::NotFound,
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}
