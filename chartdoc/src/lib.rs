#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # chartdoc
//!
//! A library for keeping chart documentation in sync with a values file.
//!
//! Parameters are documented with directive comments next to the keys they
//! describe. This library checks those directives against the actual keys,
//! fills in the default values, and renders Markdown parameter tables and a
//! JSON schema.
//!
//! ## Core Types
//!
//! - [`Settings`]: Comment prefix, tags and modifier tokens
//! - [`Metadata`], [`Section`] and [`Parameter`]: Declared documentation
//! - [`Value`] and [`ParamType`]: Values read from the YAML tree
//! - [`ResolvedMetadata`]: Render-ready metadata with modifiers applied
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chartdoc::{pipeline, Settings};
//!
//! let values = "## @section Image\n## @param image.tag Image tag\nimage:\n  tag: \"1.25\"\n";
//!
//! let settings = Settings::default();
//! let metadata = pipeline::parse_metadata(values, &settings).unwrap();
//! let resolved = pipeline::resolve(&metadata, &settings);
//! let schema = pipeline::render_schema(&resolved, &settings).unwrap();
//!
//! assert!(schema.contains("\"default\": \"1.25\""));
//! ```

pub mod config;
pub mod error;
pub mod flatten;
pub mod logging;
pub mod metadata;
pub mod modifiers;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod reconcile;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::{Settings, SettingsBuilder};
pub use error::{Error, Result};
pub use flatten::FlatEntry;
pub use logging::{init_logger, LogLevel, Logger};
pub use metadata::{Metadata, Parameter, Role, Section};
pub use modifiers::{ModifierEngine, ResolvedMetadata, ResolvedSection};
pub use parser::DirectiveParser;
pub use reconcile::ReconcileReport;
pub use value::{ParamType, Value};
