#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! End-to-end contract tests for the gemeente-sanitize binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const DEFAULT_NOTE: &str = "Er zijn geen gegevens over parkeerregels beschikbaar voor deze gemeente.";

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("gemeente-sanitize").expect("gemeente-sanitize binary");
    cmd.env_remove("GEMEENTE_SANITIZE_ROOT")
        .env_remove("GEMEENTE_SANITIZE_DEFAULT_NOTE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, content).expect("write fixture");
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read output")).expect("valid JSON output")
}

#[test]
fn rewrites_records_and_reports_each_file() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("gemeentes");
    let utrecht = root.join("utrecht/utrecht.json");
    write_file(
        &utrecht,
        r#"{"id":"utrecht","boundaries":{"type":"Polygon","coordinates":[[[5.0,52.0],[5.2,52.1]]]},"parkingRules":{"motorcycleSpecific":{"notes":null}}}"#,
    );

    bin()
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated: {}", utrecht.display())))
        .stderr(predicate::str::contains("1 file(s) scanned: 1 updated"));

    let text = fs::read_to_string(&utrecht).unwrap();
    assert!(text.contains(
        "    \"boundaries\": {\n        \"coordinates\": [[[5.0,52.0],[5.2,52.1]]],\n        \"type\": \"Polygon\"\n    },"
    ));
    let v = read_json(&utrecht);
    assert_eq!(v["parkingRules"]["motorcycleSpecific"]["notes"], DEFAULT_NOTE);
}

#[test]
fn spec_example_document() {
    let tmp = tempdir().unwrap();
    let record = tmp.path().join("voorbeeld.json");
    write_file(&record, r#"{"boundaries":{"coordinates":[[1,2],[3,4]]}}"#);

    bin().arg("--root").arg(tmp.path()).assert().success();

    let expected = format!(
        "{{\n    \"boundaries\": {{\n        \"coordinates\": [[1,2],[3,4]]\n    }},\n    \"parkingRules\": {{\n        \"motorcycleSpecific\": {{\n            \"notes\": \"{DEFAULT_NOTE}\"\n        }}\n    }}\n}}"
    );
    assert_eq!(fs::read_to_string(&record).unwrap(), expected);
}

#[test]
fn invalid_json_is_reported_and_left_untouched() {
    let tmp = tempdir().unwrap();
    let broken = tmp.path().join("broken.json");
    let good = tmp.path().join("good.json");
    write_file(&broken, "{ \"parkingRules\": ");
    write_file(&good, "{}");

    bin()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Failed to process {}: invalid JSON",
            broken.display()
        )))
        .stdout(predicate::str::contains(format!("Updated: {}", good.display())));

    assert_eq!(fs::read_to_string(&broken).unwrap(), "{ \"parkingRules\": ");
}

#[test]
fn second_run_is_a_fixed_point() {
    let tmp = tempdir().unwrap();
    let record = tmp.path().join("delft.json");
    write_file(
        &record,
        r#"{"name":"Gemeente Delft","boundaries":{"coordinates":[[[4.3, 52.0]]],"type":"Polygon"},"parkingRules":"onbekend"}"#,
    );

    bin().arg("--root").arg(tmp.path()).assert().success();
    let first = fs::read(&record).unwrap();
    bin().arg("--root").arg(tmp.path()).assert().success();
    let second = fs::read(&record).unwrap();
    assert_eq!(first, second);

    bin()
        .arg("--root")
        .arg(tmp.path())
        .arg("--check")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_mode_lists_pending_files_without_writing() {
    let tmp = tempdir().unwrap();
    let record = tmp.path().join("ede.json");
    write_file(&record, r#"{"parkingRules":{}}"#);

    bin()
        .arg("--root")
        .arg(tmp.path())
        .arg("--check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("Would update: {}", record.display())));

    assert_eq!(fs::read_to_string(&record).unwrap(), r#"{"parkingRules":{}}"#);
}

#[test]
fn root_and_note_from_environment() {
    let tmp = tempdir().unwrap();
    let record = tmp.path().join("zeeland/goes.json");
    write_file(&record, r#"{"parkingRules":{"motorcycleSpecific":{"notes":"  "}}}"#);

    bin()
        .env("GEMEENTE_SANITIZE_ROOT", tmp.path())
        .env("GEMEENTE_SANITIZE_DEFAULT_NOTE", "Nog niet onderzocht.")
        .assert()
        .success();

    let v = read_json(&record);
    assert_eq!(v["parkingRules"]["motorcycleSpecific"]["notes"], "Nog niet onderzocht.");
}

#[test]
fn default_root_is_relative_to_working_directory() {
    let tmp = tempdir().unwrap();
    let record = tmp.path().join("gemeentes/assen.json");
    write_file(&record, "{}");

    bin()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: ./gemeentes/assen.json"));
}

#[test]
fn missing_root_is_fatal() {
    let tmp = tempdir().unwrap();

    bin()
        .arg("--root")
        .arg(tmp.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("root directory not found"));
}

#[test]
fn summary_json_is_written() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("gemeentes");
    write_file(&root.join("a.json"), "{}");
    write_file(&root.join("b.json"), "[]");
    let summary_path = tmp.path().join("reports/summary.json");

    bin()
        .arg("--root")
        .arg(&root)
        .arg("--summary-json")
        .arg(&summary_path)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 file(s) scanned: 1 updated, 0 unchanged, 1 failed"));

    let summary = read_json(&summary_path);
    assert_eq!(summary["scanned"], 2);
    assert_eq!(summary["updated"], 1);
    assert_eq!(summary["unchanged"], 0);
    let failed = summary["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert!(failed[0]["error"]
        .as_str()
        .unwrap()
        .contains("expected a JSON object"));
}

#[test]
fn quiet_hides_summary_only_for_clean_runs() {
    let tmp = tempdir().unwrap();
    write_file(&tmp.path().join("hoorn.json"), "{}");

    bin()
        .arg("--root")
        .arg(tmp.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("scanned").not());

    write_file(&tmp.path().join("kapot.json"), "{");
    bin()
        .arg("--root")
        .arg(tmp.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 failed"));
}
