//! Build script for chartdoc-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, ArgGroup, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/generate.rs.
fn build_cli() -> Command {
    Command::new("chartdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate chart README parameter tables and value schemas")
        .long_about(
            "Reads documentation directives from a chart values file, checks them against \
             the actual keys, then rewrites the README parameters section and/or writes \
             a JSON schema of the values",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("values")
                .short('v')
                .long("values")
                .help("Values file carrying the documentation directives")
                .value_name("PATH")
                .required(true),
        )
        .arg(
            Arg::new("readme")
                .short('r')
                .long("readme")
                .help("README whose parameters section is rewritten in place")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("schema")
                .short('s')
                .long("schema")
                .help("Destination of the generated JSON schema")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Settings file (defaults to config.json next to the executable)")
                .value_name("PATH")
                .env("CHARTDOC_CONFIG"),
        )
        .group(
            ArgGroup::new("outputs")
                .args(["readme", "schema"])
                .required(true)
                .multiple(true),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("chartdoc.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
