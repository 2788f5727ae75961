//! Integration tests for README and schema generation.
//!
//! These tests run the `chartdoc` binary end to end and cover:
//! - Writing the README, the schema, or both
//! - Mismatch reporting and the guarantee that nothing is written on failure
//! - Exit codes for each error category
//! - Settings files changing the directive syntax

mod common;

use common::{TestEnv, README};
use predicates::prelude::*;
use serde_json::json;

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn test_generate_readme_and_schema() {
    let env = TestEnv::new();
    let (values, readme) = env.chart();

    env.generate_all(&values, &readme)
        .assert()
        .success()
        .stdout(predicate::eq("README updated\nSchema generated\n"))
        .stderr(predicate::str::contains("INFO: Metadata is correct!"));

    let updated = env.read("README.md");
    assert!(updated.starts_with("# Chart\n\n## Parameters\n\n### Common parameters\n\n"));
    assert!(updated.contains("Settings shared by all components.\n\n"));
    assert!(updated.contains("| `replicaCount`"));
    assert!(updated.contains("| `image.tag`"));
    assert!(!updated.contains("### Old"));
    assert!(updated.ends_with("## License\n\nMIT\n"));

    let schema: serde_json::Value = serde_json::from_str(&env.read("values.schema.json")).unwrap();
    assert_eq!(schema["title"], "Chart Values");
    assert_eq!(schema["type"], "object");
    assert_eq!(
        schema["properties"]["image"]["properties"]["tag"],
        json!({"type": "string", "description": "Image tag", "default": "1.25"})
    );
    assert_eq!(schema["properties"]["proxy"]["nullable"], true);
}

#[test]
fn test_readme_only() {
    let env = TestEnv::new();
    let (values, readme) = env.chart();

    env.command()
        .arg("-v")
        .arg(&values)
        .arg("-r")
        .arg(&readme)
        .assert()
        .success()
        .stdout(predicate::eq("README updated\n"));

    assert!(!env.path().join("values.schema.json").exists());
}

#[test]
fn test_schema_only_leaves_readme_untouched() {
    let env = TestEnv::new();
    let (values, _readme) = env.chart();
    let schema = env.path().join("schema.json");

    env.command()
        .arg("-v")
        .arg(&values)
        .arg("-s")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::eq("Schema generated\n"));

    assert_eq!(env.read("README.md"), README);
    assert!(env.read("schema.json").ends_with("}\n"));
}

#[test]
fn test_second_run_is_stable() {
    let env = TestEnv::new();
    let (values, readme) = env.chart();

    env.generate_all(&values, &readme).assert().success();
    let first = env.read("README.md");

    env.generate_all(&values, &readme).assert().success();
    assert_eq!(env.read("README.md"), first);
}

// ============================================================================
// Mismatch reporting
// ============================================================================

#[test]
fn test_mismatch_lines_and_exit_code() {
    let env = TestEnv::new();
    let values = env.write(
        "values.yaml",
        "## @param a A\n## @param gone Gone\na: 1\nb:\n  c: true\n",
    );
    let readme = env.write("README.md", README);

    env.generate_all(&values, &readme)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Metadata is correct").not())
        .stderr(predicate::str::contains("Missing metadata for key: b.c"))
        .stderr(predicate::str::contains(
            "Metadata provided for non existing key: gone",
        ))
        .stderr(predicate::str::contains(
            "Error: metadata errors found: 1 missing, 1 for non existing keys",
        ));

    // nothing is written when the metadata is wrong
    assert_eq!(env.read("README.md"), README);
    assert!(!env.path().join("values.schema.json").exists());
}

#[test]
fn test_mismatch_lines_survive_quiet() {
    let env = TestEnv::new();
    let values = env.write("values.yaml", "a: 1\n");
    let readme = env.write("README.md", README);

    env.generate_all(&values, &readme)
        .arg("--quiet")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing metadata for key: a"));
}

#[test]
fn test_undocumented_sequence_is_not_an_error() {
    let env = TestEnv::new();
    let values = env.write("values.yaml", "x: [1, 2]\n");
    let schema = env.path().join("schema.json");

    env.command()
        .arg("-v")
        .arg(&values)
        .arg("-s")
        .arg(&schema)
        .assert()
        .success();

    let schema: serde_json::Value = serde_json::from_str(&env.read("schema.json")).unwrap();
    assert_eq!(schema["properties"], json!({}));
}

// ============================================================================
// Error categories
// ============================================================================

#[test]
fn test_missing_values_file_is_io_error() {
    let env = TestEnv::new();

    env.command()
        .arg("-v")
        .arg(env.path().join("absent.yaml"))
        .arg("-s")
        .arg(env.path().join("schema.json"))
        .assert()
        .code(5)
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn test_missing_readme_is_io_error() {
    let env = TestEnv::new();
    let values = env.write("values.yaml", common::VALUES);

    env.command()
        .arg("-v")
        .arg(&values)
        .arg("-r")
        .arg(env.path().join("README.md"))
        .assert()
        .code(5);
}

#[test]
fn test_malformed_values_is_parse_error() {
    let env = TestEnv::new();
    let values = env.write("values.yaml", "a: [1\n");
    let readme = env.write("README.md", README);

    env.generate_all(&values, &readme)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to parse values"));
}

#[test]
fn test_readme_without_parameters_heading() {
    let env = TestEnv::new();
    let (values, _) = env.chart();
    let readme = env.write("README.md", "# Chart\n\n## Usage\n");

    env.generate_all(&values, &readme)
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parameters"));

    assert!(!env.path().join("values.schema.json").exists());
}

#[test]
fn test_invalid_settings_file() {
    let env = TestEnv::new();
    let (values, readme) = env.chart();
    env.write_config("{\"comments\": {\"format\": \"\"}}");

    env.generate_all(&values, &readme)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("comments.format"));
}

#[test]
fn test_unknown_settings_key() {
    let env = TestEnv::new();
    let (values, readme) = env.chart();
    env.write_config("{\"comment\": {\"format\": \"#\"}}");

    env.generate_all(&values, &readme).assert().code(3);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_settings_file_changes_syntax() {
    let env = TestEnv::new();
    env.write_config(
        r##"{
  "comments": { "format": "#" },
  "tags": { "param": "@value" },
  "regexp": { "paramsSectionTitle": "Values" }
}"##,
    );
    let values = env.write("values.yaml", "# @section Main\n# @value port Listen port\nport: 8080\n");
    let readme = env.write("README.md", "# Chart\n\n## Values\n");

    env.command()
        .arg("-v")
        .arg(&values)
        .arg("-r")
        .arg(&readme)
        .assert()
        .success();

    let updated = env.read("README.md");
    assert!(updated.contains("### Main"));
    assert!(updated.contains("| `port` | Listen port | `8080` |"));
}

#[test]
fn test_config_from_environment() {
    let env = TestEnv::new();
    let settings = env.write("custom.json", r##"{ "comments": { "format": "#" } }"##);
    let values = env.write("values.yaml", "# @param port Listen port\nport: 8080\n");

    env.command_bare()
        .env("CHARTDOC_CONFIG", &settings)
        .arg("-v")
        .arg(&values)
        .arg("-s")
        .arg(env.path().join("schema.json"))
        .assert()
        .success();
}

#[test]
fn test_comment_format_from_environment() {
    let env = TestEnv::new();
    let values = env.write("values.yaml", "#! @param port Listen port\nport: 8080\n");

    env.command()
        .env("CHARTDOC_COMMENT_FORMAT", "#!")
        .arg("-v")
        .arg(&values)
        .arg("-s")
        .arg(env.path().join("schema.json"))
        .assert()
        .success();
}
