//! Version command implementation.

use chrono::Local;

use crate::app::api;
use crate::domain::AppError;
use crate::domain::build_stamp::parse_build_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionFormat {
    /// Compiler define flags, one line
    #[default]
    Flags,
    /// Version string only
    Plain,
    /// JSON object with version and build date
    Json,
}

pub fn run_version(date: Option<&str>, format: VersionFormat) -> Result<(), AppError> {
    let build_date = match date {
        Some(raw) => parse_build_date(raw)?,
        None => Local::now().date_naive(),
    };
    let stamp = api::build_stamp_at(std::env::current_dir()?, build_date);

    match format {
        VersionFormat::Flags => println!("{}", stamp.to_flags()),
        VersionFormat::Plain => println!("{}", stamp.version()),
        VersionFormat::Json => println!("{}", stamp.to_json()?),
    }
    Ok(())
}
