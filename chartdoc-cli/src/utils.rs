//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by commands, settings
//! resolution and the file helpers used by the generate command.

use crate::error::CliError;
use chartdoc::config::SettingsLoader;
use chartdoc::{Error as LibError, Logger, Settings, SettingsBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Logger resolved from `--verbose`, `--quiet` and `CHARTDOC_LOG_MODE`.
    pub logger: Logger,
}

/// Resolve the settings file path.
///
/// An explicit `--config` (or `CHARTDOC_CONFIG`) wins; otherwise the
/// `config.json` shipped next to the executable is used.
pub fn resolve_settings_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(SettingsLoader::beside_executable()?),
    }
}

/// Load layered settings.
///
/// Settings are merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Settings file (a missing file is not an error)
/// 3. Built-in defaults (lowest priority)
pub fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let settings = SettingsBuilder::new().with_file(path).build()?;
    Ok(settings)
}

/// Read a text file, keeping the path in the error.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| {
        CliError::Library(LibError::File {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Write a text file, keeping the path in the error.
pub fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| {
        CliError::Library(LibError::File {
            path: path.to_path_buf(),
            source,
        })
    })
}
