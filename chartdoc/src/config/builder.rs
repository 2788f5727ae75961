//! Layered settings construction.

use crate::config::environment::EnvironmentSettings;
use crate::config::loader::SettingsLoader;
use crate::config::schema::Settings;
use crate::config::validator::SettingsValidator;
use crate::error::Result;
use std::path::PathBuf;

/// Builds [`Settings`] from defaults, an optional file and the environment.
///
/// Layers, lowest to highest precedence:
///
/// 1. Built-in defaults
/// 2. Settings file (a missing file is skipped)
/// 3. `CHARTDOC_*` environment variables
///
/// The result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use chartdoc::config::SettingsBuilder;
///
/// let settings = SettingsBuilder::new().skip_env().build().unwrap();
/// assert_eq!(settings.tags.param, "@param");
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    file: Option<PathBuf>,
    base: Option<Settings>,
    skip_env: bool,
}

impl SettingsBuilder {
    /// Create a builder that starts from built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `path` if it exists.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Start from `settings` instead of the built-in defaults.
    ///
    /// A settings file still replaces this base when present.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.base = Some(settings);
        self
    }

    /// Ignore `CHARTDOC_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Assemble and validate the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but is unreadable or
    /// malformed, or if the final settings fail validation.
    pub fn build(self) -> Result<Settings> {
        let mut settings = self.base.unwrap_or_default();

        if let Some(ref path) = self.file {
            if let Some(loaded) = SettingsLoader::load_optional(path)? {
                log::debug!("loaded settings from {}", path.display());
                settings = loaded;
            }
        }

        if !self.skip_env {
            let applied = EnvironmentSettings::apply_overrides(&mut settings);
            if applied > 0 {
                log::debug!("applied {applied} settings override(s) from the environment");
            }
        }

        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}
