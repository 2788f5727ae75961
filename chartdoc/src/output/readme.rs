//! Splicing of rendered tables into a README.

use super::{MarkdownFormatter, OutputFormatter};
use crate::error::{Error, Result};
use crate::modifiers::ResolvedMetadata;
use regex::Regex;

/// Location of the parameters heading inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsHeading {
    /// Index of the heading line.
    pub line: usize,
    /// The heading's run of `#`.
    pub hashes: String,
}

impl ParamsHeading {
    /// Find the first heading whose text matches `title_pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern does not compile and
    /// [`Error::Structural`] if no heading matches.
    pub fn find(lines: &[&str], title_pattern: &str) -> Result<Self> {
        let pattern = format!("^(#+) {title_pattern}");
        let heading = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;

        lines
            .iter()
            .enumerate()
            .find_map(|(line, text)| {
                heading.captures(text).map(|caps| Self {
                    line,
                    hashes: caps[1].to_string(),
                })
            })
            .ok_or_else(|| Error::Structural {
                title: title_pattern.to_string(),
            })
    }

    /// Heading prefix for the generated sections, one level deeper.
    #[must_use]
    pub fn child_prefix(&self) -> String {
        format!("{}#", self.hashes)
    }

    /// Index one past the last line of this heading's region: the next
    /// heading of the same level, or the end of the document.
    #[must_use]
    pub fn region_end(&self, lines: &[&str]) -> usize {
        lines
            .iter()
            .enumerate()
            .skip(self.line + 1)
            .find(|(_, text)| self.is_same_level(text))
            .map_or(lines.len(), |(i, _)| i)
    }

    fn is_same_level(&self, text: &str) -> bool {
        text.strip_prefix(self.hashes.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    }
}

/// Replace the body of the parameters section of `document` with freshly
/// rendered tables.
///
/// Everything before the heading, the heading itself, and everything from
/// the next heading of the same level onwards is kept byte for byte.
///
/// # Errors
///
/// Returns [`Error::Structural`] if the document has no heading matching
/// `title_pattern`.
///
/// # Examples
///
/// ```
/// use chartdoc::modifiers::{ResolvedMetadata, ResolvedSection};
/// use chartdoc::output::inject;
///
/// let resolved = ResolvedMetadata {
///     sections: vec![ResolvedSection { name: "Global".into(), ..Default::default() }],
///     parameters: vec![],
/// };
/// let readme = "# Chart\n\n## Parameters\n\nstale\n\n## License\n";
/// let updated = inject(readme, "Parameters", &resolved).unwrap();
///
/// assert_eq!(updated, "# Chart\n\n## Parameters\n\n### Global\n\n\n## License\n");
/// ```
pub fn inject(document: &str, title_pattern: &str, resolved: &ResolvedMetadata) -> Result<String> {
    let lines: Vec<&str> = document.split('\n').collect();
    let heading = ParamsHeading::find(&lines, title_pattern)?;
    let end = heading.region_end(&lines);

    let rendered = MarkdownFormatter::new(heading.child_prefix()).format(resolved)?;
    log::debug!(
        "replacing lines {}..{} under '{}' heading",
        heading.line + 1,
        end,
        heading.hashes
    );

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..=heading.line]);
    out.extend(rendered.split('\n'));
    out.extend_from_slice(&lines[end..]);
    Ok(out.join("\n"))
}
