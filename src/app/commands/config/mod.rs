//! Configuration file provisioning commands.

pub mod bootstrap;
pub mod status;
