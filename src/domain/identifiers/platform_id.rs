use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated hardware platform identifier, e.g. `CMSIS_STM32`.
///
/// Doubles as the directory name under `platform/` in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformId(String);

impl_validated_id!(PlatformId, false, AppError::InvalidPlatform);
