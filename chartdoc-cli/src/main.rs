//! Main entry point for the chartdoc CLI.
//!
//! Reads a values file with documentation directives, checks the directives
//! against the actual keys, then rewrites the README parameter tables and/or
//! writes the values JSON schema.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = chartdoc::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions { logger };

    // Handle errors and set exit code
    match cli.generate.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
