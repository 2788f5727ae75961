//! Output formatting module for resolved metadata.
//!
//! This module renders [`ResolvedMetadata`] into the two generated
//! artifacts: Markdown parameter tables spliced into a README, and a JSON
//! schema describing the values file.

mod markdown;
mod readme;
mod schema;

use crate::modifiers::ResolvedMetadata;
use crate::Result;

pub use markdown::{markdown_table, MarkdownFormatter};
pub use readme::{inject, ParamsHeading};
pub use schema::{SchemaFormatter, SCHEMA_TITLE};

/// Trait for formatting resolved metadata into an output document.
pub trait OutputFormatter {
    /// Format the given metadata into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., serialization errors).
    fn format(&self, resolved: &ResolvedMetadata) -> Result<String>;
}
