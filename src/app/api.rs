//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Each operation has a `*_at` form taking the project
//! root and a convenience form using the current directory.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::adapters::filesystem::LocalFilesystem;
use crate::adapters::git::GitRepositoryAdapter;
use crate::app::commands::config::{bootstrap, status};
use crate::app::commands::{platform, version};
use crate::app::{AppContext, config::load_tools_config};

pub use crate::app::commands::config::bootstrap::BootstrapOptions;
pub use crate::app::commands::platform::PlatformSelector;
pub use crate::domain::{
    AppError, BootstrapAction, BootstrapReport, BuildStamp, ConfigFileState, ConfigFileStatus,
    ConfigSet, Define, PlatformId, SourceFilter, ToolsConfig,
};

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<LocalFilesystem, GitRepositoryAdapter> {
    let filesystem = LocalFilesystem::new(path.clone());
    let git = GitRepositoryAdapter::new(path);
    AppContext::new(filesystem, git)
}

// =============================================================================
// Tool Configuration API
// =============================================================================

/// Load `uhal-tools.toml` from the specified project root, or defaults.
pub fn load_config_at(path: impl Into<PathBuf>) -> Result<ToolsConfig, AppError> {
    let ctx = create_context(path.into());
    load_tools_config(ctx.filesystem())
}

// =============================================================================
// Configuration Bootstrap API
// =============================================================================

/// Seed missing configuration files in the current directory.
pub fn bootstrap_config(
    set: &ConfigSet,
    options: BootstrapOptions,
) -> Result<BootstrapReport, AppError> {
    bootstrap_config_at(std::env::current_dir()?, set, options)
}

/// Seed missing configuration files under the specified project root.
pub fn bootstrap_config_at(
    path: impl Into<PathBuf>,
    set: &ConfigSet,
    options: BootstrapOptions,
) -> Result<BootstrapReport, AppError> {
    let ctx = create_context(path.into());
    bootstrap::execute(&ctx, set, options)
}

/// Report configuration file state under the specified project root.
pub fn config_status_at(
    path: impl Into<PathBuf>,
    set: &ConfigSet,
) -> Result<Vec<ConfigFileStatus>, AppError> {
    let ctx = create_context(path.into());
    status::execute(&ctx, set)
}

// =============================================================================
// Version Stamp API
// =============================================================================

/// Derive the build stamp for the current directory, dated today.
pub fn build_stamp() -> Result<BuildStamp, AppError> {
    Ok(build_stamp_at(std::env::current_dir()?, Local::now().date_naive()))
}

/// Derive the build stamp for the specified project root and date.
pub fn build_stamp_at(path: impl Into<PathBuf>, build_date: NaiveDate) -> BuildStamp {
    let ctx = create_context(path.into());
    version::execute(&ctx, build_date)
}

// =============================================================================
// Platform Filter API
// =============================================================================

/// Build the source filter for a platform selection.
pub fn platform_filter(selector: &PlatformSelector<'_>) -> Result<SourceFilter, AppError> {
    platform::filter(selector)
}

/// List platforms available under `source_dir` of the specified project root.
pub fn list_platforms_at(
    path: impl Into<PathBuf>,
    source_dir: &Path,
) -> Result<Vec<String>, AppError> {
    let ctx = create_context(path.into());
    platform::list(&ctx, source_dir)
}

/// List source files compiled for a platform selection.
pub fn platform_sources_at(
    path: impl Into<PathBuf>,
    source_dir: &Path,
    selector: &PlatformSelector<'_>,
) -> Result<Vec<String>, AppError> {
    let ctx = create_context(path.into());
    platform::sources(&ctx, source_dir, selector)
}
