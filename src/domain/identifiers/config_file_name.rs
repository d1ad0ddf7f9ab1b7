use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated configuration file name, e.g. `config.h`.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path separators, and never `.` or `..`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigFileName(String);

impl_validated_id!(ConfigFileName, true, AppError::InvalidConfigFileName);
