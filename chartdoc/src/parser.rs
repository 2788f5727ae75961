//! Directive comment parser.
//!
//! Reads a values file line by line and recovers the declared sections and
//! parameters. Every line is classified by the first matcher that accepts
//! it, in this order: section, description start, description end and
//! description content (only inside a description block), param, skip,
//! extra. Lines matching nothing are ignored.
//!
//! Comment prefix and tags come from [`Settings`] and are matched
//! literally; leading whitespace and whitespace between the prefix and the
//! tag are optional.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::metadata::{Metadata, Parameter, Section};
use regex::Regex;

/// Whether the parser is inside a description block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Tags,
    Description,
}

/// One classified line.
#[derive(Debug, PartialEq)]
enum Directive<'a> {
    Section(&'a str),
    DescriptionStart(&'a str),
    DescriptionEnd,
    DescriptionLine(&'a str),
    Param {
        name: &'a str,
        modifiers: Option<&'a str>,
        description: &'a str,
    },
    Skip(&'a str),
    Extra {
        name: &'a str,
        modifiers: Option<&'a str>,
        description: &'a str,
    },
}

/// Compiled directive matchers for one set of settings.
///
/// # Examples
///
/// ```
/// use chartdoc::config::Settings;
/// use chartdoc::parser::DirectiveParser;
///
/// let parser = DirectiveParser::new(&Settings::default()).unwrap();
/// let metadata = parser.parse(
///     "## @section Global\n## @param replicaCount [nullable] Number of pods\nreplicaCount: 1\n",
/// );
///
/// assert_eq!(metadata.sections[0].name, "Global");
/// assert_eq!(metadata.parameters[0].name, "replicaCount");
/// assert_eq!(metadata.parameters[0].modifiers, ["nullable"]);
/// assert_eq!(metadata.parameters[0].description, "Number of pods");
/// ```
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    section: Regex,
    description_start: Regex,
    description_end: Regex,
    description_line: Regex,
    param: Regex,
    skip: Regex,
    extra: Regex,
}

impl DirectiveParser {
    /// Build the matchers from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a matcher fails to compile.
    pub fn new(settings: &Settings) -> Result<Self> {
        let prefix = format!(r"^\s*{}", regex::escape(&settings.comments.format));
        let tag = |tag: &str| format!(r"{prefix}\s*{}", regex::escape(tag));
        let tags = &settings.tags;

        Ok(Self {
            section: compile(format!(r"{}\s*(.*)$", tag(&tags.section)))?,
            description_start: compile(format!(r"{}\s*(.*)$", tag(&tags.description_start)))?,
            description_end: compile(tag(&tags.description_end))?,
            description_line: compile(format!(r"{prefix}\s?(.*)"))?,
            param: compile(format!(
                r"{}\s*([^\s]+)\s*(\[.*?\])?\s*(.*)$",
                tag(&tags.param)
            ))?,
            skip: compile(format!(r"{}\s*([^\s]+).*", tag(&tags.skip)))?,
            extra: compile(format!(
                r"{}\s*([^\s]+)\s*(\[.*?\])?\s*(.*)$",
                tag(&tags.extra)
            ))?,
        })
    }

    /// Parse the directive comments of a values file.
    #[must_use]
    pub fn parse(&self, source: &str) -> Metadata {
        let mut metadata = Metadata::default();
        let mut mode = Mode::Tags;
        let mut current: Option<usize> = None;

        for raw in source.split('\n') {
            let line = raw.trim_end_matches('\r');
            let Some(directive) = self.classify(line, mode) else {
                continue;
            };

            match directive {
                Directive::Section(title) => {
                    current = Some(metadata.add_section(Section::new(section_title(title))));
                    mode = Mode::Tags;
                }
                Directive::DescriptionStart(text) => {
                    mode = Mode::Description;
                    if !text.is_empty() {
                        push_description(&mut metadata, current, text);
                    }
                }
                Directive::DescriptionEnd => mode = Mode::Tags,
                Directive::DescriptionLine(text) => push_description(&mut metadata, current, text),
                Directive::Param {
                    name,
                    modifiers,
                    description,
                } => {
                    let parameter = Parameter::new(name)
                        .with_description(description)
                        .with_modifiers(split_modifiers(modifiers));
                    metadata.add_parameter(parameter, current);
                }
                Directive::Skip(name) => {
                    metadata.add_parameter(Parameter::skip(name), current);
                }
                Directive::Extra {
                    name,
                    modifiers,
                    description,
                } => {
                    let parameter = Parameter::extra(name)
                        .with_description(description)
                        .with_modifiers(split_modifiers(modifiers));
                    metadata.add_parameter(parameter, current);
                }
            }
        }

        if mode == Mode::Description {
            log::debug!("description block left open at end of file");
        }
        log::debug!(
            "parsed {} section(s) and {} parameter(s)",
            metadata.sections.len(),
            metadata.parameters.len()
        );

        metadata
    }

    fn classify<'a>(&self, line: &'a str, mode: Mode) -> Option<Directive<'a>> {
        if let Some(caps) = self.section.captures(line) {
            return Some(Directive::Section(group(&caps, 1)));
        }
        if let Some(caps) = self.description_start.captures(line) {
            return Some(Directive::DescriptionStart(group(&caps, 1)));
        }
        if mode == Mode::Description {
            if self.description_end.is_match(line) {
                return Some(Directive::DescriptionEnd);
            }
            if let Some(caps) = self.description_line.captures(line) {
                return Some(Directive::DescriptionLine(group(&caps, 1)));
            }
        }
        if let Some(caps) = self.param.captures(line) {
            return Some(Directive::Param {
                name: group(&caps, 1),
                modifiers: caps.get(2).map(|m| m.as_str()),
                description: group(&caps, 3),
            });
        }
        if let Some(caps) = self.skip.captures(line) {
            return Some(Directive::Skip(group(&caps, 1)));
        }
        self.extra.captures(line).map(|caps| Directive::Extra {
            name: group(&caps, 1),
            modifiers: caps.get(2).map(|m| m.as_str()),
            description: group(&caps, 3),
        })
    }
}

fn compile(pattern: String) -> Result<Regex> {
    Regex::new(&pattern).map_err(|source| Error::InvalidPattern { pattern, source })
}

fn group<'a>(caps: &regex::Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn push_description(metadata: &mut Metadata, section: Option<usize>, text: &str) {
    if let Some(section) = section.and_then(|i| metadata.sections.get_mut(i)) {
        section.description_lines.push(text.to_string());
    }
}

fn section_title(raw: &str) -> &str {
    let title = raw.trim();
    title
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(title)
}

fn split_modifiers(list: Option<&str>) -> Vec<&str> {
    list.map(|l| l.trim_matches(|c| c == '[' || c == ']'))
        .into_iter()
        .flat_map(|l| l.split(','))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect()
}
