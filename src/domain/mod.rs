pub mod bootstrap;
pub mod build_stamp;
pub mod config_set;
pub mod error;
pub mod identifiers;
pub mod platform;
pub mod tools_config;

pub use bootstrap::{
    BootstrapAction, BootstrapReport, ConfigFileState, ConfigFileStatus, FileProbe,
};
pub use build_stamp::{BuildStamp, FALLBACK_VERSION};
pub use config_set::{ConfigEntry, ConfigSet};
pub use error::AppError;
pub use identifiers::{ConfigFileName, PlatformId};
pub use platform::{Define, FilterRule, SourceFilter, select_platform};
pub use tools_config::{TOOLS_CONFIG_FILE, ToolsConfig};
