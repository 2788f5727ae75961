//! Markdown table rendering.

use super::OutputFormatter;
use crate::metadata::Parameter;
use crate::modifiers::{ResolvedMetadata, ResolvedSection};
use crate::value::Value;
use crate::Result;

const HEADER: [&str; 3] = ["Name", "Description", "Value"];

/// Renders every section as a heading followed by a parameter table.
///
/// # Examples
///
/// ```
/// use chartdoc::modifiers::{ResolvedMetadata, ResolvedSection};
/// use chartdoc::output::{MarkdownFormatter, OutputFormatter};
///
/// let resolved = ResolvedMetadata {
///     sections: vec![ResolvedSection { name: "Empty".into(), ..Default::default() }],
///     parameters: vec![],
/// };
/// let text = MarkdownFormatter::new("###").format(&resolved).unwrap();
/// assert_eq!(text, "\n### Empty\n\n");
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    heading: String,
}

impl MarkdownFormatter {
    /// Create a formatter whose section headings start with `heading`
    /// (a run of `#`).
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
        }
    }

    /// Render one section: heading, description, then the table if the
    /// section has any parameters.
    #[must_use]
    pub fn render_section(&self, section: &ResolvedSection) -> String {
        let mut out = format!("{} {}\n\n", self.heading, section.name);

        let description = section.description();
        if !description.is_empty() {
            out.push_str(&description);
            out.push_str("\n\n");
        }

        if !section.parameters.is_empty() {
            out.push_str(&markdown_table(&section.parameters));
        }
        out
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, resolved: &ResolvedMetadata) -> Result<String> {
        let mut out = String::new();
        for section in &resolved.sections {
            out.push('\n');
            out.push_str(&self.render_section(section));
        }
        Ok(out)
    }
}

/// Render a `Name | Description | Value` table with every column padded
/// to its widest cell.
#[must_use]
pub fn markdown_table(parameters: &[Parameter]) -> String {
    let mut rows: Vec<[String; 3]> = vec![HEADER.map(String::from)];
    rows.extend(parameters.iter().map(|p| {
        [
            format!("`{}`", p.name),
            p.description.clone(),
            value_cell(p),
        ]
    }));

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, width) in row.iter().zip(widths) {
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.chars().count()));
            out.push_str(" |");
        }
        out.push('\n');

        if i == 0 {
            out.push('|');
            for width in widths {
                out.push(' ');
                out.push_str(&"-".repeat(width));
                out.push_str(" |");
            }
            out.push('\n');
        }
    }
    out
}

fn value_cell(parameter: &Parameter) -> String {
    if parameter.is_extra() {
        return String::new();
    }
    match &parameter.value {
        None => "`null`".to_string(),
        Some(Value::String(s)) if s.is_empty() => "`\"\"`".to_string(),
        Some(Value::String(s)) => format!("`{s}`"),
        Some(other) => format!("`{}`", other.to_json()),
    }
}
