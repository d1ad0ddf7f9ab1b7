//! Project-level settings read from `uhal-tools.toml`.
//!
//! Every field has a default matching the stock uHAL layout, so the file is
//! optional and may set only what differs.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::config_set::{
    DEFAULT_CONFIG_DIR, DEFAULT_TEMPLATE_DIR, ConfigSet, default_config_files,
};
use crate::domain::platform::{DEFAULT_PLATFORM_DEFINE, DEFAULT_SOURCE_DIR, Define};
use crate::domain::{AppError, ConfigFileName};

/// File name looked up at the project root.
pub const TOOLS_CONFIG_FILE: &str = "uhal-tools.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    #[serde(default)]
    pub config: ConfigSection,
    #[serde(default)]
    pub platform: PlatformSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Files to seed, in processing order.
    #[serde(default = "default_config_files")]
    pub files: Vec<ConfigFileName>,
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            files: default_config_files(),
            config_dir: default_config_dir(),
            template_dir: default_template_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSection {
    /// Define whose value names the platform.
    #[serde(default = "default_platform_define")]
    pub define: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
}

impl Default for PlatformSection {
    fn default() -> Self {
        Self { define: default_platform_define(), source_dir: default_source_dir() }
    }
}

fn default_config_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_DIR)
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_DIR)
}

fn default_platform_define() -> String {
    DEFAULT_PLATFORM_DEFINE.to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

impl ToolsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.config.files.is_empty() {
            return Err(AppError::config_error("[config] files must list at least one file"));
        }

        let mut seen = HashSet::new();
        for name in &self.config.files {
            if !seen.insert(name.as_str()) {
                return Err(AppError::config_error(format!(
                    "[config] files lists '{}' more than once",
                    name
                )));
            }
        }

        if self.config.config_dir == self.config.template_dir {
            return Err(AppError::config_error(
                "[config] config_dir and template_dir must be different directories",
            ));
        }

        Define::new(self.platform.define.clone(), None).map_err(|_| {
            AppError::config_error(format!(
                "[platform] define '{}' is not a valid preprocessor identifier",
                self.platform.define
            ))
        })?;

        Ok(())
    }

    pub fn config_set(&self) -> ConfigSet {
        ConfigSet::new(
            self.config.files.clone(),
            self.config.config_dir.clone(),
            self.config.template_dir.clone(),
        )
    }
}

/// Parse and validate tool configuration from TOML content.
pub fn parse_tools_config(content: &str) -> Result<ToolsConfig, AppError> {
    let config: ToolsConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
