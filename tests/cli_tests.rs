//! Integration tests for the vacuum CLI
//!
//! These tests run the actual binary. The interactive dashboard needs a
//! terminal, so only its argument and loading failures are covered here.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vacuum_cmd() -> Command {
    Command::cargo_bin("vacuum").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    vacuum_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("generate-ruleset"));
}

// ============================================================================
// generate-ruleset
// ============================================================================

#[test]
fn test_generate_ruleset_requires_mode() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .arg("generate-ruleset")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "please supply 'recommended' or 'all'",
        ))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_generate_ruleset_rejects_unknown_mode() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .args(["generate-ruleset", "some"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("your choice 'some' is not valid"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_ruleset_writes_named_file() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .args(["generate-ruleset", "all", "petstore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RuleSet generated for 'all'"))
        .stdout(predicate::str::contains("petstore-all.yaml"));

    let written = fs::read_to_string(temp_dir.path().join("petstore-all.yaml")).unwrap();
    assert!(written.contains("documentationUrl"));
    assert!(written.contains("operation-operationId"));
    // strict style rule, only in "all"
    assert!(written.contains("openapi-tags-alphabetical"));
}

#[test]
fn test_generate_ruleset_default_name() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .args(["generate-ruleset", "recommended"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("ruleset-recommended.yaml")).unwrap();
    assert!(written.contains("info-contact"));
    assert!(!written.contains("openapi-tags-alphabetical"));
}

#[test]
fn test_generate_ruleset_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .args(["generate-ruleset", "all", "no-such-dir/rules"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to write RuleSet file"));
}

// ============================================================================
// dashboard
// ============================================================================

#[test]
fn test_dashboard_missing_report() {
    let temp_dir = TempDir::new().unwrap();
    vacuum_cmd()
        .current_dir(temp_dir.path())
        .args(["dashboard", "missing-report.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to read report"));
}

#[test]
fn test_dashboard_malformed_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("report.json");
    fs::write(&report, "{ not json").unwrap();

    vacuum_cmd()
        .arg("dashboard")
        .arg(&report)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON parse error"));
}

#[test]
fn test_dashboard_rejects_unknown_config_key() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("dashboard.yaml");
    fs::write(&config, "snippet_context: 2\ncolour: pink\n").unwrap();

    vacuum_cmd()
        .args(["dashboard", "tests/fixtures/petstore-report.yaml", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dashboard config"));
}

#[test]
fn test_dashboard_missing_config_names_file() {
    vacuum_cmd()
        .args([
            "dashboard",
            "tests/fixtures/petstore-report.yaml",
            "--config",
            "no-such-dashboard.yaml",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to read dashboard config"))
        .stderr(predicate::str::contains("no-such-dashboard.yaml"));
}
