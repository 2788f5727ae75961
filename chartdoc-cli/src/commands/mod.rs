//! Command implementations for the chartdoc CLI.

pub mod generate;

pub use generate::GenerateCommand;
