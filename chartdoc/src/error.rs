//! Error types for the chartdoc library.
//!
//! This module provides the error hierarchy for every stage of the
//! generator pipeline, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a chartdoc error.
///
/// # Examples
///
/// ```
/// use chartdoc::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the chartdoc library.
#[derive(Debug, Error)]
pub enum Error {
    /// Declared metadata and the actual values tree disagree.
    ///
    /// Both lists are always complete: reconciliation never stops at the
    /// first mismatch.
    #[error(
        "metadata errors found: {} missing, {} for non existing keys",
        missing.len(),
        orphan.len()
    )]
    Validation {
        /// Paths present in the values tree with no matching declaration.
        missing: Vec<String>,
        /// Declared paths with no matching key in the values tree.
        orphan: Vec<String>,
    },

    /// The values document is not valid YAML.
    #[error("failed to parse values: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The settings document could not be parsed or failed validation.
    #[error("invalid settings for '{field}': {message}")]
    Settings {
        /// The settings field (or file) at fault.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// The target document does not have the expected structure.
    #[error("could not find a '{title}' section in the target document")]
    Structural {
        /// The heading title pattern that was searched for.
        title: String,
    },

    /// A directive or heading matcher could not be compiled.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    File {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema tree could not be serialized.
    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error is a metadata/values mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartdoc::Error;
    ///
    /// let err = Error::Validation { missing: vec!["a".into()], orphan: vec![] };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if the error comes from reading or writing files.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::File { .. })
    }
}
