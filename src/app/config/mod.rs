//! Project-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::tools_config`.

mod load_config;

pub use load_config::load_tools_config;
