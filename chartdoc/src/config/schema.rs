//! Settings schema definitions.
//!
//! The settings document mirrors the historical `config.json` layout of
//! the chart README generator: comment prefix, directive tags, the README
//! heading pattern and modifier tokens. Every key is optional.

use serde::{Deserialize, Serialize};

/// Default comment prefix introducing a directive.
pub const DEFAULT_COMMENT_FORMAT: &str = "##";

/// Default heading title pattern for the README parameters section.
pub const DEFAULT_PARAMS_SECTION_TITLE: &str = "Parameters";

/// Complete generator settings.
///
/// # Examples
///
/// ```
/// use chartdoc::config::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.comments.format, "##");
/// assert_eq!(settings.tags.param, "@param");
/// assert_eq!(settings.modifiers.nullable, "nullable");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Comment syntax.
    pub comments: CommentSettings,

    /// Directive tag strings.
    pub tags: TagSettings,

    /// Patterns used against the target document.
    pub regexp: RegexpSettings,

    /// Modifier tokens recognized inside `[...]` lists.
    pub modifiers: ModifierSettings,
}

/// Comment syntax settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CommentSettings {
    /// Prefix that starts a directive comment (e.g. `##`).
    pub format: String,
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_COMMENT_FORMAT.to_string(),
        }
    }
}

/// Directive tag strings.
///
/// # Examples
///
/// ```
/// use chartdoc::config::TagSettings;
///
/// let tags = TagSettings::default();
/// assert_eq!(tags.description_start, "@descriptionStart");
/// assert_eq!(tags.all().len(), 6);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TagSettings {
    /// Declares a documented parameter.
    pub param: String,
    /// Opens a new section.
    pub section: String,
    /// Opens a section description block.
    pub description_start: String,
    /// Closes a section description block.
    pub description_end: String,
    /// Excludes a path and its subtree.
    pub skip: String,
    /// Declares a parameter that has no counterpart in the values.
    pub extra: String,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            param: "@param".to_string(),
            section: "@section".to_string(),
            description_start: "@descriptionStart".to_string(),
            description_end: "@descriptionEnd".to_string(),
            skip: "@skip".to_string(),
            extra: "@extra".to_string(),
        }
    }
}

impl TagSettings {
    /// All tags paired with their settings key, in declaration order.
    #[must_use]
    pub fn all(&self) -> [(&'static str, &str); 6] {
        [
            ("tags.param", &self.param),
            ("tags.section", &self.section),
            ("tags.descriptionStart", &self.description_start),
            ("tags.descriptionEnd", &self.description_end),
            ("tags.skip", &self.skip),
            ("tags.extra", &self.extra),
        ]
    }
}

/// Patterns matched against the target document.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RegexpSettings {
    /// Regex matched against heading text to find the parameters section.
    pub params_section_title: String,
}

impl Default for RegexpSettings {
    fn default() -> Self {
        Self {
            params_section_title: DEFAULT_PARAMS_SECTION_TITLE.to_string(),
        }
    }
}

/// Modifier tokens.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ModifierSettings {
    /// Forces the `array` type.
    pub array: String,
    /// Forces the `object` type.
    pub object: String,
    /// Forces the `string` type.
    pub string: String,
    /// Marks the parameter as nullable.
    pub nullable: String,
    /// Prefix of `<default>:<literal>` default-value overrides.
    pub default: String,
}

impl Default for ModifierSettings {
    fn default() -> Self {
        Self {
            array: "array".to_string(),
            object: "object".to_string(),
            string: "string".to_string(),
            nullable: "nullable".to_string(),
            default: "default".to_string(),
        }
    }
}

impl ModifierSettings {
    /// All modifier tokens paired with their settings key.
    #[must_use]
    pub fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("modifiers.array", &self.array),
            ("modifiers.object", &self.object),
            ("modifiers.string", &self.string),
            ("modifiers.nullable", &self.nullable),
            ("modifiers.default", &self.default),
        ]
    }
}
