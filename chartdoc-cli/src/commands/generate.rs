//! Command to regenerate the README parameter tables and the values schema.

use crate::error::CliError;
use crate::utils::{load_settings, read_text, resolve_settings_path, write_text, GlobalOptions};
use chartdoc::{pipeline, Error as LibError, Metadata, ResolvedMetadata, Settings};
use clap::Args;
use std::path::{Path, PathBuf};

/// Regenerate documentation from a values file.
#[derive(Args)]
pub struct GenerateCommand {
    /// Values file carrying the documentation directives
    #[arg(short, long, value_name = "PATH")]
    pub values: PathBuf,

    /// README whose parameters section is rewritten in place
    #[arg(short, long, value_name = "PATH")]
    pub readme: Option<PathBuf>,

    /// Destination of the generated JSON schema
    #[arg(short, long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Settings file (defaults to config.json next to the executable)
    #[arg(short, long, value_name = "PATH", env = "CHARTDOC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Settings
        let settings_path = resolve_settings_path(self.config)?;
        let settings = load_settings(&settings_path)?;

        // 2. Parse and check the values file; nothing is written on mismatch
        let values = read_text(&self.values)?;
        let metadata = check_metadata(&values, &settings)?;
        global.logger.status("Metadata is correct!");
        let resolved = pipeline::resolve(&metadata, &settings);

        // 3. README first, then schema
        if let Some(readme) = self.readme.as_deref() {
            update_readme(readme, &resolved, &settings)?;
            println!("README updated");
        }

        if let Some(schema) = self.schema.as_deref() {
            let rendered = pipeline::render_schema(&resolved, &settings)?;
            write_text(schema, &rendered)?;
            println!("Schema generated");
        }

        Ok(())
    }
}

/// Parse the values file, reporting every mismatch line on failure.
fn check_metadata(values: &str, settings: &Settings) -> Result<Metadata, CliError> {
    match pipeline::parse_metadata(values, settings) {
        Ok(metadata) => Ok(metadata),
        Err(LibError::Validation { missing, orphan }) => {
            for key in &missing {
                eprintln!("Missing metadata for key: {key}");
            }
            for key in &orphan {
                eprintln!("Metadata provided for non existing key: {key}");
            }
            Err(LibError::Validation { missing, orphan }.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn update_readme(path: &Path, resolved: &ResolvedMetadata, settings: &Settings) -> Result<(), CliError> {
    let document = read_text(path)?;
    let updated = pipeline::update_readme(&document, resolved, settings)?;
    write_text(path, &updated)?;
    Ok(())
}
