//! Settings validation.
//!
//! Catches settings that would make the directive parser ambiguous or the
//! README heading lookup impossible, before any input file is touched.

use crate::config::schema::Settings;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;

/// Validates settings.
///
/// # Examples
///
/// ```
/// use chartdoc::config::{Settings, SettingsValidator};
///
/// SettingsValidator::validate(&Settings::default()).unwrap();
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate a complete settings value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] naming the first offending key.
    pub fn validate(settings: &Settings) -> Result<()> {
        Self::validate_token("comments.format", &settings.comments.format)?;

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (field, tag) in settings.tags.all() {
            Self::validate_token(field, tag)?;
            if let Some(previous) = seen.insert(tag, field) {
                return Err(Error::Settings {
                    field: field.into(),
                    message: format!("tag '{tag}' is already used by {previous}"),
                });
            }
        }

        for (field, token) in settings.modifiers.all() {
            Self::validate_token(field, token)?;
            if token.contains(',') || token.contains(']') {
                return Err(Error::Settings {
                    field: field.into(),
                    message: "cannot contain ',' or ']'".into(),
                });
            }
        }

        Self::validate_title_pattern(&settings.regexp.params_section_title)
    }

    /// Tokens must be non-blank and free of interior whitespace, since
    /// directives are split on whitespace.
    fn validate_token(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Settings {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.chars().any(char::is_whitespace) {
            return Err(Error::Settings {
                field: field.into(),
                message: "Cannot contain whitespace".into(),
            });
        }

        Ok(())
    }

    fn validate_title_pattern(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(Error::Settings {
                field: "regexp.paramsSectionTitle".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        Regex::new(pattern).map_err(|e| Error::Settings {
            field: "regexp.paramsSectionTitle".into(),
            message: format!("not a valid regular expression: {e}"),
        })?;

        Ok(())
    }
}
