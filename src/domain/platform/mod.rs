//! Platform selection and source filtering for multi-platform builds.

mod define;
mod source_filter;

pub use define::{Define, select_platform};
pub use source_filter::{FilterRule, SourceFilter};

/// Preprocessor define naming the target platform.
pub const DEFAULT_PLATFORM_DEFINE: &str = "uHAL_PLATFORM";
/// Source root that filter patterns are relative to.
pub const DEFAULT_SOURCE_DIR: &str = "src";
/// Directory under the source root holding one subdirectory per platform.
pub const PLATFORM_DIR: &str = "platform";
