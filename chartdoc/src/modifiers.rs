//! Modifier application and output selection.
//!
//! Modifiers are the bracketed tokens after a parameter path, such as
//! `[array, nullable]` or `[default: 8080]`. They override the type and
//! value taken from the values tree before anything is rendered.

use crate::config::{ModifierSettings, Settings};
use crate::metadata::{Metadata, Parameter};
use crate::value::{ParamType, Value};

/// A single parsed modifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier<'a> {
    /// Forces the array type; resets the value to `[]`.
    Array,
    /// Forces the object type; resets the value to `{}`.
    Object,
    /// Forces the string type; resets the value to `""`.
    String,
    /// Marks the value nullable; sets it to null when unset.
    Nullable,
    /// Replaces the value with a literal string.
    Default(&'a str),
    /// A token matching no configured modifier.
    Unknown(&'a str),
}

impl<'a> Modifier<'a> {
    /// Classify `token` against the configured modifier tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartdoc::config::ModifierSettings;
    /// use chartdoc::modifiers::Modifier;
    ///
    /// let tokens = ModifierSettings::default();
    /// assert_eq!(Modifier::parse("array", &tokens), Modifier::Array);
    /// assert_eq!(Modifier::parse("default: 80 ", &tokens), Modifier::Default("80"));
    /// assert_eq!(Modifier::parse("sorted", &tokens), Modifier::Unknown("sorted"));
    /// ```
    #[must_use]
    pub fn parse(token: &'a str, tokens: &ModifierSettings) -> Self {
        if token == tokens.array {
            Self::Array
        } else if token == tokens.object {
            Self::Object
        } else if token == tokens.string {
            Self::String
        } else if token == tokens.nullable {
            Self::Nullable
        } else if let Some(literal) = token
            .strip_prefix(tokens.default.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
        {
            Self::Default(literal.trim())
        } else {
            Self::Unknown(token)
        }
    }
}

/// A section ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSection {
    /// Heading text.
    pub name: String,
    /// Description lines.
    pub description_lines: Vec<String>,
    /// Output-eligible parameters, modifiers applied.
    pub parameters: Vec<Parameter>,
}

impl ResolvedSection {
    /// Description lines joined with newlines.
    #[must_use]
    pub fn description(&self) -> String {
        self.description_lines.join("\n")
    }
}

/// Metadata with skips removed and modifiers applied.
///
/// The README renderer reads `sections`; the schema renderer reads
/// `parameters`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedMetadata {
    /// Sections in file order.
    pub sections: Vec<ResolvedSection>,
    /// Every output-eligible parameter in declaration order.
    pub parameters: Vec<Parameter>,
}

/// Applies modifiers using a given set of tokens.
#[derive(Debug, Clone, Copy)]
pub struct ModifierEngine<'s> {
    tokens: &'s ModifierSettings,
}

impl<'s> ModifierEngine<'s> {
    /// Engine for the modifier tokens of `settings`.
    #[must_use]
    pub fn new(settings: &'s Settings) -> Self {
        Self {
            tokens: &settings.modifiers,
        }
    }

    /// Apply the modifiers of `parameter` in declaration order.
    ///
    /// When the nullable token is the last modifier, type-forcing modifiers
    /// leave the value alone, so `[array, nullable]` on an unset value ends
    /// up null while `[nullable, array]` ends up `[]`.
    pub fn apply(&self, parameter: &mut Parameter) {
        let Some(last) = parameter.modifiers.last() else {
            return;
        };
        let nullable_last = *last == self.tokens.nullable;

        for token in &parameter.modifiers {
            match Modifier::parse(token, self.tokens) {
                Modifier::Array => {
                    parameter.param_type = Some(ParamType::Array);
                    if !nullable_last {
                        parameter.value = Some(Value::empty_sequence());
                    }
                }
                Modifier::Object => {
                    parameter.param_type = Some(ParamType::Object);
                    if !nullable_last {
                        parameter.value = Some(Value::empty_mapping());
                    }
                }
                Modifier::String => {
                    parameter.param_type = Some(ParamType::String);
                    if !nullable_last {
                        parameter.value = Some(Value::String(String::new()));
                    }
                }
                Modifier::Nullable => {
                    if parameter.value_is_unset() {
                        parameter.value = Some(Value::Null);
                    }
                }
                Modifier::Default(literal) => {
                    parameter.value = Some(Value::String(literal.to_string()));
                }
                Modifier::Unknown(other) => {
                    log::debug!("ignoring unknown modifier '{other}' on {}", parameter.name);
                }
            }
        }
    }

    /// Drop skip parameters and apply modifiers to the rest.
    #[must_use]
    pub fn resolve(&self, metadata: &Metadata) -> ResolvedMetadata {
        let sections = metadata
            .sections
            .iter()
            .map(|section| ResolvedSection {
                name: section.name.clone(),
                description_lines: section.description_lines.clone(),
                parameters: self.output_parameters(metadata.section_parameters(section)),
            })
            .collect();

        ResolvedMetadata {
            sections,
            parameters: self.output_parameters(metadata.parameters.iter()),
        }
    }

    fn output_parameters<'p>(&self, parameters: impl Iterator<Item = &'p Parameter>) -> Vec<Parameter> {
        parameters
            .filter(|p| p.role().renders())
            .map(|p| {
                let mut resolved = p.clone();
                self.apply(&mut resolved);
                resolved
            })
            .collect()
    }
}
