//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout carries only command output, which build
//! systems capture verbatim.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `uhal_tools=trace`.
pub const LOG_ENV: &str = "UHAL_TOOLS_LOG";

pub fn init(verbose: bool) {
    let default_directive = if verbose { "uhal_tools=debug" } else { "uhal_tools=warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
