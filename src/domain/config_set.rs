//! The ordered set of configuration files seeded from templates.

use std::path::{Path, PathBuf};

use crate::domain::ConfigFileName;

/// Configuration files required by a uHAL build, in processing order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["config.h", "advanced.h"];
/// Directory holding the live configuration files.
pub const DEFAULT_CONFIG_DIR: &str = "config";
/// Directory holding the pristine templates.
pub const DEFAULT_TEMPLATE_DIR: &str = "config/templates";

pub fn default_config_files() -> Vec<ConfigFileName> {
    DEFAULT_CONFIG_FILES.iter().filter_map(|name| ConfigFileName::new(name).ok()).collect()
}

/// A configuration file paired with its template and destination paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: ConfigFileName,
    pub template: PathBuf,
    pub destination: PathBuf,
}

/// Files to bootstrap plus the two directories they move between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSet {
    files: Vec<ConfigFileName>,
    config_dir: PathBuf,
    template_dir: PathBuf,
}

impl ConfigSet {
    pub fn new(
        files: Vec<ConfigFileName>,
        config_dir: impl Into<PathBuf>,
        template_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { files, config_dir: config_dir.into(), template_dir: template_dir.into() }
    }

    pub fn files(&self) -> &[ConfigFileName] {
        &self.files
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Replace the file list, keeping the directories.
    pub fn with_files(mut self, files: Vec<ConfigFileName>) -> Self {
        self.files = files;
        self
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = ConfigEntry> + '_ {
        self.files.iter().map(|name| ConfigEntry {
            name: name.clone(),
            template: self.template_dir.join(name.as_str()),
            destination: self.config_dir.join(name.as_str()),
        })
    }
}

impl Default for ConfigSet {
    fn default() -> Self {
        Self::new(default_config_files(), DEFAULT_CONFIG_DIR, DEFAULT_TEMPLATE_DIR)
    }
}
