//! Environment variable handling for settings overrides.
//!
//! `CHARTDOC_*` variables override values from the settings file. Only the
//! two settings that commonly differ between repositories are exposed.

use crate::config::schema::Settings;
use std::env;

/// Overrides `comments.format`.
pub const COMMENT_FORMAT_ENV: &str = "CHARTDOC_COMMENT_FORMAT";

/// Overrides `regexp.paramsSectionTitle`.
pub const PARAMS_SECTION_TITLE_ENV: &str = "CHARTDOC_PARAMS_SECTION_TITLE";

/// Handles environment variable overrides for settings.
///
/// # Examples
///
/// ```no_run
/// use chartdoc::config::{EnvironmentSettings, Settings};
///
/// let mut settings = Settings::default();
/// let applied = EnvironmentSettings::apply_overrides(&mut settings);
/// println!("{applied} override(s) applied");
/// ```
pub struct EnvironmentSettings;

impl EnvironmentSettings {
    /// Apply `CHARTDOC_*` overrides to `settings`.
    ///
    /// Empty variables are ignored. Returns how many overrides were applied.
    pub fn apply_overrides(settings: &mut Settings) -> usize {
        let mut applied = 0;

        if let Some(format) = Self::non_empty(COMMENT_FORMAT_ENV) {
            settings.comments.format = format;
            applied += 1;
        }

        if let Some(title) = Self::non_empty(PARAMS_SECTION_TITLE_ENV) {
            settings.regexp.params_section_title = title;
            applied += 1;
        }

        applied
    }

    fn non_empty(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}
