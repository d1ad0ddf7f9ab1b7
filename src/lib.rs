//! uhal-tools: build-support tooling for uHAL firmware projects.
//!
//! Seeds configuration files from templates, stamps builds with a version and
//! date, and restricts compiled sources to one hardware platform.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BootstrapOptions, PlatformSelector, bootstrap_config, bootstrap_config_at, build_stamp,
    build_stamp_at, config_status_at, list_platforms_at, load_config_at, platform_filter,
    platform_sources_at,
};
pub use domain::{
    AppError, BootstrapAction, BootstrapReport, BuildStamp, ConfigFileName, ConfigFileState,
    ConfigFileStatus, ConfigSet, Define, FilterRule, PlatformId, SourceFilter, ToolsConfig,
};
