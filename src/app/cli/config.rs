//! Config command implementation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, BootstrapOptions};
use crate::domain::{AppError, ConfigFileName, ConfigFileState, ConfigSet};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Copy missing configuration files from their templates
    #[clap(visible_alias = "check")]
    Bootstrap {
        #[command(flatten)]
        set: ConfigSetArgs,
        /// Show what would be copied without copying
        #[arg(long)]
        dry_run: bool,
    },
    /// Compare configuration files against their templates
    #[clap(visible_alias = "st")]
    Status {
        #[command(flatten)]
        set: ConfigSetArgs,
    },
}

#[derive(Args)]
pub struct ConfigSetArgs {
    /// Directory holding the live configuration files
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Directory holding the templates
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Configuration file name (repeatable; replaces the configured list)
    #[arg(short, long = "file", value_name = "NAME")]
    files: Vec<String>,
}

impl ConfigSetArgs {
    /// Layer CLI overrides over `uhal-tools.toml` over built-in defaults.
    fn resolve(self) -> Result<ConfigSet, AppError> {
        let mut set = api::load_config_at(std::env::current_dir()?)?.config_set();

        if !self.files.is_empty() {
            let files = self
                .files
                .iter()
                .map(|name| ConfigFileName::new(name))
                .collect::<Result<Vec<_>, _>>()?;
            set = set.with_files(files);
        }
        if let Some(dir) = self.config_dir {
            set = set.with_config_dir(dir);
        }
        if let Some(dir) = self.template_dir {
            set = set.with_template_dir(dir);
        }
        Ok(set)
    }
}

pub fn run_config(command: ConfigCommands) -> Result<(), AppError> {
    match command {
        ConfigCommands::Bootstrap { set, dry_run } => run_bootstrap(set, dry_run),
        ConfigCommands::Status { set } => run_status(set),
    }
}

fn run_bootstrap(args: ConfigSetArgs, dry_run: bool) -> Result<(), AppError> {
    let set = args.resolve()?;
    let report = api::bootstrap_config(&set, BootstrapOptions { dry_run })?;

    if dry_run && report.is_noop() {
        println!("All configuration files present");
    }
    Ok(())
}

fn run_status(args: ConfigSetArgs) -> Result<(), AppError> {
    let set = args.resolve()?;
    let statuses = api::config_status_at(std::env::current_dir()?, &set)?;

    for status in &statuses {
        let marker = match status.state {
            ConfigFileState::Default => "✅",
            ConfigFileState::Customized => "✏️ ",
            ConfigFileState::Missing => "➕",
            ConfigFileState::TemplateMissing => "⚠️ ",
        };
        println!("{} {} ({})", marker, status.destination.display(), status.state.label());
    }
    Ok(())
}
