//! Derive the build stamp from source control and the build date.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::BuildStamp;
use crate::ports::{GitPort, ProjectFilesystem};

/// Execute the version command.
///
/// Never fails: any problem describing HEAD yields the fallback version.
pub fn execute<F, G>(ctx: &AppContext<F, G>, build_date: NaiveDate) -> BuildStamp
where
    F: ProjectFilesystem,
    G: GitPort,
{
    match ctx.git().describe() {
        Ok(version) if !version.is_empty() => {
            debug!(%version, "described HEAD");
            BuildStamp::new(version, build_date)
        }
        Ok(_) => {
            warn!("git describe returned nothing, using fallback version");
            BuildStamp::fallback(build_date)
        }
        Err(err) => {
            warn!("{}, using fallback version", err);
            BuildStamp::fallback(build_date)
        }
    }
}
