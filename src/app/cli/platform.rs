//! Platform command implementation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, PlatformSelector};
use crate::domain::{AppError, Define, PlatformId};

#[derive(Subcommand)]
pub enum PlatformCommands {
    /// Print the source filter for the selected platform
    #[clap(visible_alias = "f")]
    Filter {
        #[command(flatten)]
        selection: PlatformArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: FilterFormat,
    },
    /// List source files compiled for the selected platform
    #[clap(visible_alias = "src")]
    Sources {
        #[command(flatten)]
        selection: PlatformArgs,
        /// Source root (defaults to [platform] source_dir)
        #[arg(long)]
        source_dir: Option<PathBuf>,
        /// Explicit filter rules, e.g. "+<*> -<platform/> +<platform/common>"
        #[arg(long, value_name = "RULES", conflicts_with_all = ["defines", "platform"])]
        filter: Option<String>,
    },
    /// List available platforms
    #[clap(visible_alias = "ls")]
    List {
        /// Source root (defaults to [platform] source_dir)
        #[arg(long)]
        source_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterFormat {
    /// Space-separated +<...>/-<...> rules
    #[default]
    Rules,
    /// JSON array of rules
    Json,
}

#[derive(Args)]
pub struct PlatformArgs {
    /// Preprocessor define, NAME or NAME=VALUE (repeatable)
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    defines: Vec<String>,
    /// Platform name, bypassing define lookup
    #[arg(short, long, conflicts_with = "defines")]
    platform: Option<String>,
}

impl PlatformArgs {
    fn parse_defines(&self) -> Result<Vec<Define>, AppError> {
        self.defines.iter().map(|raw| raw.parse()).collect()
    }

    fn explicit_platform(&self) -> Result<Option<PlatformId>, AppError> {
        self.platform.as_deref().map(PlatformId::new).transpose()
    }
}

pub fn run_platform(command: PlatformCommands) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let config = api::load_config_at(&root)?;
    let define_name = config.platform.define.as_str();

    match command {
        PlatformCommands::Filter { selection, format } => {
            let defines = selection.parse_defines()?;
            let selector = selector(&selection, &defines, define_name)?;
            let filter = api::platform_filter(&selector)?;
            match format {
                FilterFormat::Rules => println!("{}", filter.render()),
                FilterFormat::Json => println!("{}", filter.to_json()?),
            }
        }
        PlatformCommands::Sources { selection, source_dir, filter } => {
            let defines = selection.parse_defines()?;
            let selector = match filter {
                Some(rules) => PlatformSelector::Rules(rules.parse()?),
                None => selector(&selection, &defines, define_name)?,
            };
            let source_dir = source_dir.unwrap_or_else(|| config.platform.source_dir.clone());
            for file in api::platform_sources_at(&root, &source_dir, &selector)? {
                println!("{}", file);
            }
        }
        PlatformCommands::List { source_dir } => {
            let source_dir = source_dir.unwrap_or_else(|| config.platform.source_dir.clone());
            let platforms = api::list_platforms_at(&root, &source_dir)?;
            if platforms.is_empty() {
                println!("No platforms found under {}", source_dir.join("platform").display());
            }
            for platform in platforms {
                println!("{}", platform);
            }
        }
    }
    Ok(())
}

fn selector<'a>(
    selection: &PlatformArgs,
    defines: &'a [Define],
    define_name: &'a str,
) -> Result<PlatformSelector<'a>, AppError> {
    Ok(match selection.explicit_platform()? {
        Some(platform) => PlatformSelector::Explicit(platform),
        None => PlatformSelector::Defines { defines, define_name },
    })
}
