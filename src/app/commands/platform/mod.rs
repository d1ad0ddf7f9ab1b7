//! Platform selection and source filtering commands.

use std::path::Path;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::platform::PLATFORM_DIR;
use crate::domain::{AppError, Define, PlatformId, SourceFilter, select_platform};
use crate::ports::{GitPort, ProjectFilesystem};

/// How the platform is chosen.
#[derive(Debug, Clone)]
pub enum PlatformSelector<'a> {
    /// Named directly.
    Explicit(PlatformId),
    /// Taken from the first valued define with this name.
    Defines { defines: &'a [Define], define_name: &'a str },
    /// Explicit filter rules, such as an existing `src_filter` line.
    Rules(SourceFilter),
}

/// Resolve the selected platform, if any.
pub fn resolve_platform(selector: &PlatformSelector<'_>) -> Result<Option<PlatformId>, AppError> {
    match selector {
        PlatformSelector::Explicit(platform) => Ok(Some(platform.clone())),
        PlatformSelector::Defines { defines, define_name } => select_platform(defines, define_name),
        PlatformSelector::Rules(_) => Ok(None),
    }
}

/// Build the source filter for the selected platform.
///
/// Without a platform the filter is unrestricted.
pub fn filter(selector: &PlatformSelector<'_>) -> Result<SourceFilter, AppError> {
    if let PlatformSelector::Rules(rules) = selector {
        return Ok(rules.clone());
    }

    match resolve_platform(selector)? {
        Some(platform) => {
            debug!(%platform, "restricting sources to platform");
            Ok(SourceFilter::for_platform(&platform))
        }
        None => {
            info!("no platform selected, sources left unrestricted");
            Ok(SourceFilter::unrestricted())
        }
    }
}

/// List platforms with a directory under `<source_dir>/platform/`.
pub fn list<F, G>(ctx: &AppContext<F, G>, source_dir: &Path) -> Result<Vec<String>, AppError>
where
    F: ProjectFilesystem,
    G: GitPort,
{
    ctx.filesystem().list_dirs(&source_dir.join(PLATFORM_DIR))
}

/// List source files the selected platform's filter includes.
pub fn sources<F, G>(
    ctx: &AppContext<F, G>,
    source_dir: &Path,
    selector: &PlatformSelector<'_>,
) -> Result<Vec<String>, AppError>
where
    F: ProjectFilesystem,
    G: GitPort,
{
    if !ctx.filesystem().is_dir(source_dir) {
        return Err(AppError::config_error(format!(
            "Source directory not found: {}",
            source_dir.display()
        )));
    }

    let source_filter = match &resolve_platform(selector)? {
        Some(platform) => {
            let available = list(ctx, source_dir)?;
            if !available.iter().any(|name| name == platform.as_str()) {
                return Err(AppError::UnknownPlatform {
                    name: platform.to_string(),
                    available: if available.is_empty() {
                        "(none)".to_string()
                    } else {
                        available.join(", ")
                    },
                });
            }
            SourceFilter::for_platform(platform)
        }
        None => filter(selector)?,
    };

    let files = ctx.filesystem().list_files(source_dir)?;
    Ok(source_filter.apply(files.iter().map(String::as_str)))
}
