//! End-to-end generator entry points.
//!
//! These functions run the pipeline stages on in-memory text. Reading and
//! writing files is left to the caller.
//!
//! ```
//! use chartdoc::config::Settings;
//! use chartdoc::pipeline;
//!
//! let settings = Settings::default();
//! let values = "## @section Global\n## @param replicaCount Number of replicas\nreplicaCount: 1\n";
//!
//! let metadata = pipeline::parse_metadata(values, &settings).unwrap();
//! let resolved = pipeline::resolve(&metadata, &settings);
//! let readme = pipeline::update_readme("## Parameters\n", &resolved, &settings).unwrap();
//!
//! assert!(readme.contains("| `replicaCount` | Number of replicas | `1`   |"));
//! ```

use crate::config::Settings;
use crate::error::Result;
use crate::flatten::flatten_str;
use crate::metadata::Metadata;
use crate::modifiers::{ModifierEngine, ResolvedMetadata};
use crate::output::{inject, OutputFormatter, SchemaFormatter};
use crate::parser::DirectiveParser;
use crate::reconcile::{merge, reconcile};

/// Parse, validate and merge a values file.
///
/// The returned metadata holds every declared parameter filled from the
/// values tree, followed by implicit skip parameters for undeclared paths.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if the source is not valid YAML,
/// [`crate::Error::InvalidPattern`] if the directive matchers cannot be
/// built from `settings`, and [`crate::Error::Validation`] if declarations
/// and values disagree.
pub fn parse_metadata(values_source: &str, settings: &Settings) -> Result<Metadata> {
    let real = flatten_str(values_source)?;
    let mut metadata = DirectiveParser::new(settings)?.parse(values_source);

    let report = reconcile(&real, &metadata.parameters)?;
    log::debug!(
        "reconciled {} key(s), {} skipped",
        report.checked,
        report.skipped
    );

    merge(&mut metadata, &real);
    Ok(metadata)
}

/// Drop skipped parameters and apply modifiers.
#[must_use]
pub fn resolve(metadata: &Metadata, settings: &Settings) -> ResolvedMetadata {
    ModifierEngine::new(settings).resolve(metadata)
}

/// Replace the parameters section of a README.
///
/// # Errors
///
/// Returns [`crate::Error::Structural`] if `document` has no heading
/// matching the configured title pattern.
pub fn update_readme(document: &str, resolved: &ResolvedMetadata, settings: &Settings) -> Result<String> {
    inject(document, &settings.regexp.params_section_title, resolved)
}

/// Render the JSON schema.
///
/// # Errors
///
/// Returns [`crate::Error::Serialize`] if the schema cannot be serialized.
pub fn render_schema(resolved: &ResolvedMetadata, settings: &Settings) -> Result<String> {
    SchemaFormatter::new(settings).format(resolved)
}
