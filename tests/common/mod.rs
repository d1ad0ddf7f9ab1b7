//! Shared testing utilities for uhal-tools CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("uhal-tools").expect("Failed to locate uhal-tools binary");
        cmd.current_dir(&self.work_dir).env_remove("UHAL_TOOLS_LOG");
        cmd
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Read a file relative to the project directory, if present.
    pub fn read_file(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.work_dir.join(relative)).ok()
    }

    /// Write a template under `config/templates/`.
    pub fn write_template(&self, name: &str, content: &str) {
        self.write_file(&format!("config/templates/{}", name), content);
    }

    /// Write a live configuration file under `config/`.
    pub fn write_config(&self, name: &str, content: &str) {
        self.write_file(&format!("config/{}", name), content);
    }

    /// Read a live configuration file under `config/`.
    pub fn read_config(&self, name: &str) -> Option<String> {
        self.read_file(&format!("config/{}", name))
    }

    /// Seed the stock uHAL templates: `config.h`="A", `advanced.h`="B".
    pub fn seed_default_templates(&self) {
        self.write_template("config.h", "A");
        self.write_template("advanced.h", "B");
    }

    /// Lay out a uHAL-style source tree with two platforms.
    pub fn seed_source_tree(&self) {
        for file in [
            "src/gpio.c",
            "src/pinctrl.c",
            "src/platform/AVR_XMEGA3/gpio.c",
            "src/platform/AVR_XMEGA3/time_TCA.c",
            "src/platform/CMSIS_STM32/gpio.c",
            "src/platform/CMSIS_STM32/platform/stm32f103.h",
            "src/platform/common/uart_buf.c",
        ] {
            self.write_file(file, "");
        }
    }
}
