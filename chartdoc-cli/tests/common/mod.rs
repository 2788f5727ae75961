//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A values file whose directives match its keys exactly.
#[allow(dead_code)]
pub const VALUES: &str = "\
## @section Common parameters
## @descriptionStart
## Settings shared by all components.
## @descriptionEnd

## @param replicaCount Number of replicas
replicaCount: 1
## @param image.repository Image repository
## @param image.tag Image tag
image:
  repository: nginx
  tag: \"1.25\"
## @param proxy [string, nullable] Outbound proxy
proxy:
";

/// A README with a parameters section holding stale content.
#[allow(dead_code)]
pub const README: &str = "\
# Chart

## Parameters

### Old

| Name | Description | Value |

## License

MIT
";

/// Test environment with an isolated working directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for values, README and schema files
/// - A settings path inside that directory, so the `config.json` next to
///   the test binary is never picked up
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path passed as `--config`; the file does not exist until written
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("config.json");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment overrides are cleared so the host environment cannot
    /// leak into the run.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("chartdoc").expect("Failed to find chartdoc binary");
        cmd.env_remove("CHARTDOC_CONFIG")
            .env_remove("CHARTDOC_LOG_MODE")
            .env_remove("CHARTDOC_COMMENT_FORMAT")
            .env_remove("CHARTDOC_PARAMS_SECTION_TITLE");
        cmd
    }

    /// Get a command builder with `--config` pointing into this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file under the temp directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// Write the settings file used by [`TestEnv::command`].
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write settings");
    }

    /// Write the default values and README fixtures.
    ///
    /// Returns the values and README paths.
    pub fn chart(&self) -> (PathBuf, PathBuf) {
        (self.write("values.yaml", VALUES), self.write("README.md", README))
    }

    /// Run the generator on both outputs and return the command.
    pub fn generate_all(&self, values: &Path, readme: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("--values")
            .arg(values)
            .arg("--readme")
            .arg(readme)
            .arg("--schema")
            .arg(self.temp_path.join("values.schema.json"));
        cmd
    }
}
