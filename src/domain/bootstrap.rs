//! Outcomes of configuration bootstrapping and status inspection.

use std::path::PathBuf;

use crate::domain::ConfigFileName;

/// Observed state of a destination file before bootstrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProbe {
    Absent,
    Present,
}

/// What happened to a single configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Template copied into a previously absent destination.
    Copied { name: ConfigFileName, template: PathBuf, destination: PathBuf, bytes: u64 },
    /// Destination already present; left untouched.
    Kept { name: ConfigFileName, destination: PathBuf },
    /// Dry run: the template would have been copied.
    WouldCopy { name: ConfigFileName, template: PathBuf, destination: PathBuf },
}

/// Ordered record of one bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    actions: Vec<BootstrapAction>,
}

impl BootstrapReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: BootstrapAction) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[BootstrapAction] {
        &self.actions
    }

    pub fn copied(&self) -> impl Iterator<Item = &BootstrapAction> {
        self.actions.iter().filter(|a| matches!(a, BootstrapAction::Copied { .. }))
    }

    pub fn kept(&self) -> impl Iterator<Item = &BootstrapAction> {
        self.actions.iter().filter(|a| matches!(a, BootstrapAction::Kept { .. }))
    }

    pub fn pending(&self) -> impl Iterator<Item = &BootstrapAction> {
        self.actions.iter().filter(|a| matches!(a, BootstrapAction::WouldCopy { .. }))
    }

    /// True when the run created nothing and would create nothing.
    pub fn is_noop(&self) -> bool {
        self.actions.iter().all(|a| matches!(a, BootstrapAction::Kept { .. }))
    }
}

/// Destination state relative to its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileState {
    /// Destination absent; bootstrapping would copy the template.
    Missing,
    /// Destination identical to the template.
    Default,
    /// Destination differs from the template.
    Customized,
    /// Template absent; nothing to compare or copy from.
    TemplateMissing,
}

impl ConfigFileState {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigFileState::Missing => "missing",
            ConfigFileState::Default => "default",
            ConfigFileState::Customized => "customized",
            ConfigFileState::TemplateMissing => "template missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileStatus {
    pub name: ConfigFileName,
    pub destination: PathBuf,
    pub state: ConfigFileState,
}
