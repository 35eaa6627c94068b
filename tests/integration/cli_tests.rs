//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project_dir() -> TempDir {
    tempfile::Builder::new().prefix("assets").tempdir().unwrap()
}

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// One used image, one unused image and one unused color
fn build_project(root: &Path) {
    let catalog = root.join("Assets.xcassets");
    write(&catalog.join("Logo.imageset/logo.png"), &[0; 300]);
    write(&catalog.join("Stale.imageset/stale.png"), &[0; 2048]);
    write(&catalog.join("Faded.colorset/Contents.json"), &[b' '; 64]);
    write(
        &root.join("Sources/App.swift"),
        b"let logo = UIImage(named: \"Logo\")\n",
    );
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("asset-organizer").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("asset-organizer"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("--min-size"));
}

#[test]
fn test_cli_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("asset-organizer"));
}

#[test]
fn test_invalid_min_size_is_a_usage_error() {
    let temp = project_dir();
    cli()
        .arg(temp.path())
        .args(["--min-size", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid size"));
}

#[test]
fn test_missing_project_fails() {
    let temp = project_dir();
    cli()
        .arg(temp.path().join("nowhere"))
        .arg("-q")
        .assert()
        .failure();
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_terminal_report() {
    let temp = project_dir();
    build_project(temp.path());

    cli()
        .arg(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total assets:  3"))
        .stdout(predicate::str::contains("Found 2 unused assets"));
}

#[test]
fn test_analyze_subcommand_json() {
    let temp = project_dir();
    build_project(temp.path());

    let output = cli()
        .arg("analyze")
        .arg(temp.path())
        .args(["--format", "json", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["totalAssets"], 3);
    assert_eq!(value["summary"]["unusedAssets"], 2);
    assert_eq!(value["summary"]["totalSize"], 300 + 2048 + 64);
}

#[test]
fn test_analyze_filters() {
    let temp = project_dir();
    build_project(temp.path());

    let output = cli()
        .arg(temp.path())
        .args(["--type", "image", "--min-size", "1KB", "--format", "json", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["totalAssets"], 1);
    assert_eq!(value["assets"][0]["name"], "Stale");
}

#[test]
fn test_analyze_saves_markdown_report() {
    let temp = project_dir();
    build_project(temp.path());
    let output = temp.path().join("report");

    cli()
        .arg(temp.path())
        .arg("-q")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let saved = fs::read_to_string(temp.path().join("report.md")).unwrap();
    assert!(saved.contains("# Asset Analysis Report"));
    assert!(saved.contains("| Unused Assets | 2 |"));
}

#[test]
fn test_analyze_saves_json_report() {
    let temp = project_dir();
    build_project(temp.path());
    let output = temp.path().join("report.json");

    cli()
        .arg(temp.path())
        .arg("-q")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let saved = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["summary"]["unusedAssets"], 2);
}

#[test]
fn test_config_file_extends_sources() {
    let temp = project_dir();
    build_project(temp.path());
    // Only visible once .txt files are sources
    write(&temp.path().join("notes.txt"), b"\"Stale\"");
    write(
        &temp.path().join(".assetorganizer.yml"),
        b"source_extensions: [swift, txt]\n",
    );

    let output = cli()
        .arg(temp.path())
        .args(["--format", "json", "-q"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["unusedAssets"], 1);
}

// ============================================================================
// Clean
// ============================================================================

#[test]
fn test_clean_dry_run_keeps_files() {
    let temp = project_dir();
    build_project(temp.path());

    cli()
        .arg("clean")
        .arg(temp.path())
        .args(["--dry-run", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run - would delete:"));

    assert!(temp.path().join("Assets.xcassets/Stale.imageset").exists());
    assert!(temp.path().join("Assets.xcassets/Faded.colorset").exists());
}

#[test]
fn test_clean_force_deletes_unused() {
    let temp = project_dir();
    build_project(temp.path());

    cli()
        .arg("clean")
        .arg(temp.path())
        .args(["--force", "-q"])
        .assert()
        .success();

    let catalog = temp.path().join("Assets.xcassets");
    assert!(catalog.join("Logo.imageset").exists());
    assert!(!catalog.join("Stale.imageset").exists());
    assert!(!catalog.join("Faded.colorset").exists());
}

#[test]
fn test_clean_respects_type_filter() {
    let temp = project_dir();
    build_project(temp.path());

    cli()
        .arg("clean")
        .arg(temp.path())
        .args(["--force", "--type", "color", "-q"])
        .assert()
        .success();

    let catalog = temp.path().join("Assets.xcassets");
    assert!(catalog.join("Stale.imageset").exists());
    assert!(!catalog.join("Faded.colorset").exists());
}
