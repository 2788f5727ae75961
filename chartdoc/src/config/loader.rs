//! Settings file discovery and loading.
//!
//! Settings files may be JSON (`.json`) or YAML (anything else). A missing
//! settings file is not an error: callers fall back to built-in defaults.

use crate::config::schema::Settings;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up next to the executable when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "config.json";

/// On-disk format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl SettingsFormat {
    /// Picks the format from the file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartdoc::config::SettingsFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SettingsFormat::from_path(Path::new("config.json")), SettingsFormat::Json);
    /// assert_eq!(SettingsFormat::from_path(Path::new("config.yaml")), SettingsFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Loads settings from disk.
///
/// # Examples
///
/// ```no_run
/// use chartdoc::config::SettingsLoader;
/// use std::path::Path;
///
/// let settings = SettingsLoader::load_optional(Path::new("config.json")).unwrap();
/// println!("custom settings: {}", settings.is_some());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load a settings file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Settings>> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, SettingsFormat::from_path(path), path).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings file at {}, using defaults", path.display());
                Ok(None)
            }
            Err(source) => Err(Error::File {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load and parse a settings file that must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// settings document.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, SettingsFormat::from_path(path), path)
    }

    /// Parse settings text in the given format.
    ///
    /// `origin` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] if the document is malformed or contains
    /// unknown keys.
    pub fn parse(contents: &str, format: SettingsFormat, origin: &Path) -> Result<Settings> {
        // An empty YAML document deserializes to unit, not a map.
        if format == SettingsFormat::Yaml && contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        let parsed = match format {
            SettingsFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            SettingsFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::Settings {
            field: origin.display().to_string(),
            message,
        })
    }

    /// Path of the settings file shipped next to the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn beside_executable() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(DEFAULT_SETTINGS_FILE))
    }
}
