//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The tool has a single operation, so the generate arguments are flattened
//! into the top-level command next to the global logging options.

use crate::commands::GenerateCommand;
use clap::{ArgGroup, Parser};

/// Keep chart README parameter tables and value schemas in sync with values.yaml.
#[derive(Parser)]
#[command(name = "chartdoc")]
#[command(
    version,
    about = "Generate chart README parameter tables and value schemas",
    long_about = None
)]
#[command(group(
    ArgGroup::new("outputs")
        .args(["readme", "schema"])
        .required(true)
        .multiple(true)
))]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub generate: GenerateCommand,
}
