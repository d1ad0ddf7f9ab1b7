//! Tool configuration loading from the project root.

use std::path::Path;

use tracing::debug;

use crate::domain::tools_config::parse_tools_config;
use crate::domain::{AppError, TOOLS_CONFIG_FILE, ToolsConfig};
use crate::ports::ProjectFilesystem;

/// Load `uhal-tools.toml`, falling back to built-in defaults when absent.
pub fn load_tools_config<F: ProjectFilesystem>(filesystem: &F) -> Result<ToolsConfig, AppError> {
    let path = Path::new(TOOLS_CONFIG_FILE);

    if !filesystem.file_exists(path) {
        debug!("no {} found, using defaults", TOOLS_CONFIG_FILE);
        return Ok(ToolsConfig::default());
    }

    let content = filesystem.read_to_string(path)?;
    parse_tools_config(&content).map_err(|e| match e {
        AppError::TomlParseError(err) => {
            AppError::config_error(format!("Failed to parse {}: {}", TOOLS_CONFIG_FILE, err))
        }
        other => other,
    })
}
