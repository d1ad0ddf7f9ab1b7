//! Compare configuration files against their templates.

use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::{AppError, ConfigFileState, ConfigFileStatus, ConfigSet, FileProbe};
use crate::ports::{GitPort, ProjectFilesystem};

/// Execute the status command. Read-only.
pub fn execute<F, G>(ctx: &AppContext<F, G>, set: &ConfigSet) -> Result<Vec<ConfigFileStatus>, AppError>
where
    F: ProjectFilesystem,
    G: GitPort,
{
    let fs = ctx.filesystem();
    let mut statuses = Vec::new();

    for entry in set.entries() {
        let destination = fs.probe(&entry.destination)?;
        let template_present = fs.probe(&entry.template)? == FileProbe::Present;

        let state = match (destination, template_present) {
            (_, false) => ConfigFileState::TemplateMissing,
            (FileProbe::Absent, true) => ConfigFileState::Missing,
            (FileProbe::Present, true) => {
                let current = hash_content(&fs.read_bytes(&entry.destination)?);
                let default = hash_content(&fs.read_bytes(&entry.template)?);
                if current == default {
                    ConfigFileState::Default
                } else {
                    ConfigFileState::Customized
                }
            }
        };

        statuses.push(ConfigFileStatus { name: entry.name, destination: entry.destination, state });
    }

    Ok(statuses)
}

fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
