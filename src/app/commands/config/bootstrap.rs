//! Seed missing configuration files from their templates.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, BootstrapAction, BootstrapReport, ConfigSet, FileProbe};
use crate::ports::{GitPort, ProjectFilesystem};

#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapOptions {
    /// Report what would be copied without touching the filesystem.
    pub dry_run: bool,
}

/// Execute the bootstrap command.
///
/// Files are processed in order. A present destination is never touched; an
/// absent one is copied from its template. The first failure aborts the run,
/// leaving later files unprocessed.
pub fn execute<F, G>(
    ctx: &AppContext<F, G>,
    set: &ConfigSet,
    options: BootstrapOptions,
) -> Result<BootstrapReport, AppError>
where
    F: ProjectFilesystem,
    G: GitPort,
{
    let mut report = BootstrapReport::new();

    for entry in set.entries() {
        match ctx.filesystem().probe(&entry.destination)? {
            FileProbe::Present => {
                debug!("Configuration file {} exists", entry.destination.display());
                report.push(BootstrapAction::Kept {
                    name: entry.name,
                    destination: entry.destination,
                });
            }
            FileProbe::Absent if options.dry_run => {
                ensure_template(ctx.filesystem(), &entry.template, &entry.destination)?;
                println!(
                    "Would copy {} to {}",
                    entry.template.display(),
                    entry.destination.display()
                );
                report.push(BootstrapAction::WouldCopy {
                    name: entry.name,
                    template: entry.template,
                    destination: entry.destination,
                });
            }
            FileProbe::Absent => {
                println!("Copying {} to {}", entry.template.display(), entry.destination.display());
                let bytes = ctx.filesystem().copy_new(&entry.template, &entry.destination)?;
                info!(bytes, "copied {}", entry.name);
                report.push(BootstrapAction::Copied {
                    name: entry.name,
                    template: entry.template,
                    destination: entry.destination,
                    bytes,
                });
            }
        }
    }

    Ok(report)
}

/// Fail the way `copy_new` would when the template cannot be read.
fn ensure_template<F: ProjectFilesystem>(
    filesystem: &F,
    template: &Path,
    destination: &Path,
) -> Result<(), AppError> {
    let copy_error = |error: io::Error| AppError::TemplateCopy {
        template: template.to_path_buf(),
        destination: destination.to_path_buf(),
        error,
    };

    match filesystem.probe(template) {
        Ok(FileProbe::Present) => Ok(()),
        Ok(FileProbe::Absent) => {
            Err(copy_error(io::Error::new(io::ErrorKind::NotFound, "template not found")))
        }
        Err(AppError::ConfigUnreadable { error, .. }) => Err(copy_error(error)),
        Err(e) => Err(e),
    }
}
