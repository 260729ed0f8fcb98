//! End-to-end tests for the `stepform` binary's non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const VALID_DRAFT: &str = r#"{
    "name": "Kavya",
    "age": 28,
    "sex": "female",
    "mobile": "9876543210",
    "idType": "aadhar",
    "idValue": "123412341234",
    "city": "Bengaluru"
}"#;

fn stepform() -> Command {
    let mut cmd = Command::cargo_bin("stepform").unwrap();
    cmd.env_remove("STEPFORM_LOG");
    cmd
}

#[test]
fn test_check_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("draft.json");
    fs::write(&path, VALID_DRAFT).unwrap();

    stepform()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Record is valid"))
        .stdout(predicate::str::contains("Kavya"))
        .stdout(predicate::str::contains("Bengaluru"));
}

#[test]
fn test_check_reports_field_errors() {
    stepform()
        .args(["check", "-"])
        .write_stdin(r#"{"name": "Al", "mobile": "12345"}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Name must be at least 3 characters long.",
        ))
        .stdout(predicate::str::contains("Mobile must be 10 digits."));
}

#[test]
fn test_check_json_report() {
    let draft = VALID_DRAFT.replace("123412341234", "ABCDE1234F");

    let output = stepform()
        .args(["check", "-", "--json"])
        .write_stdin(draft)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"][0]["field"], "idValue");
    assert_eq!(report["errors"][0]["message"], "Invalid ID");
}

#[test]
fn test_check_json_record() {
    let output = stepform()
        .args(["check", "-", "--json"])
        .write_stdin(VALID_DRAFT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["record"]["age"], 28);
    assert_eq!(report["record"]["idType"], "aadhar");
}

#[test]
fn test_check_rejects_non_object() {
    stepform()
        .args(["check", "-"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn test_check_missing_file() {
    stepform()
        .args(["check", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.json"));
}

#[test]
fn test_schema_lists_rules() {
    stepform()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Personal Details"))
        .stdout(predicate::str::contains("Step 2: Address Details"))
        .stdout(predicate::str::contains("exactly 10 digits"))
        .stdout(predicate::str::contains(
            "exactly 12 characters when idType = aadhar",
        ));
}

#[test]
fn test_schema_json() {
    let output = stepform()
        .args(["schema", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let fields: Value = serde_json::from_slice(&output).unwrap();
    let fields = fields.as_array().unwrap();
    assert_eq!(fields.len(), 11);
    assert_eq!(fields[0]["field"], "name");
    assert_eq!(fields[0]["step"], "personal");
    assert_eq!(fields[0]["rules"][1]["message"], "Name must be at least 3 characters long.");
}

#[test]
fn test_init_creates_config_once() {
    let dir = tempdir().unwrap();

    stepform()
        .args(["init", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let config = dir.path().join(".stepform").join("config.toml");
    assert!(config.exists());

    stepform()
        .args(["init", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    stepform()
        .args(["init", "--force", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
}
