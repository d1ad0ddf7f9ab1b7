//! CLI Adapter.

mod config;
mod logging;
mod platform;
mod version;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uhal-tools")]
#[command(version)]
#[command(about = "Build-support tooling for uHAL firmware projects", long_about = None)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision configuration files from templates
    #[clap(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// Print the build stamp (version and build date) as compiler defines
    Version {
        /// Build date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: version::VersionFormat,
    },
    /// Select platform sources for a build
    #[clap(visible_alias = "p")]
    Platform {
        #[command(subcommand)]
        command: platform::PlatformCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Config { command } => config::run_config(command),
        Commands::Version { date, format } => version::run_version(date.as_deref(), format),
        Commands::Platform { command } => platform::run_platform(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
