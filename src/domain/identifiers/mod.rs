mod config_file_name;
mod platform_id;
pub mod validation;

pub use config_file_name::ConfigFileName;
pub use platform_id::PlatformId;
