//! Common test utilities for integration tests.
//!
//! This module provides fixture lookup and small builders for values files
//! used across the chartdoc integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Path of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Contents of a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn read_fixture(relative: &str) -> String {
    fs::read_to_string(fixture_path(relative))
        .unwrap_or_else(|e| panic!("cannot read fixture {relative}: {e}"))
}

/// Write `content` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Builder for values files with directive comments.
///
/// # Examples
///
/// ```no_run
/// # use common::ValuesFixture;
/// let values = ValuesFixture::new()
///     .section("Global")
///     .param("replicaCount", "Number of replicas")
///     .yaml("replicaCount: 1")
///     .build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct ValuesFixture {
    lines: Vec<String>,
}

#[allow(dead_code)]
impl ValuesFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `## @section` line.
    pub fn section(mut self, title: &str) -> Self {
        self.lines.push(format!("## @section {title}"));
        self
    }

    /// Adds a `## @param` line without modifiers.
    pub fn param(mut self, path: &str, description: &str) -> Self {
        self.lines.push(format!("## @param {path} {description}"));
        self
    }

    /// Adds a `## @param` line with modifiers.
    pub fn param_with(mut self, path: &str, modifiers: &[&str], description: &str) -> Self {
        self.lines.push(format!(
            "## @param {path} [{}] {description}",
            modifiers.join(", ")
        ));
        self
    }

    /// Adds a `## @skip` line.
    pub fn skip(mut self, path: &str) -> Self {
        self.lines.push(format!("## @skip {path}"));
        self
    }

    /// Adds a `## @extra` line.
    pub fn extra(mut self, path: &str, description: &str) -> Self {
        self.lines.push(format!("## @extra {path} {description}"));
        self
    }

    /// Adds raw YAML.
    pub fn yaml(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// Returns the values file text.
    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
