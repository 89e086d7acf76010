//! Self-check command specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > specdoc's own suite passes and reports a measured duration
#[test]
fn self_check_passes() {
    let dir = temp_project();

    specdoc_cmd()
        .arg("self-check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\nquantify\n - uses the singular for one\n"))
        .stdout(predicates::str::contains("Finished in "))
        .stdout(predicates::str::ends_with("15 examples, 0 failures\n"));
}

/// > JSON self-check output parses and passes
#[test]
fn self_check_json() {
    let dir = temp_project();

    let output = specdoc_cmd()
        .args(["self-check", "-o", "json"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["passed"], true);
    assert_eq!(value["summary"]["examples"], 15);
}

/// > --verbose logs to stderr without touching stdout
#[test]
fn self_check_verbose_logs_to_stderr() {
    let dir = temp_project();

    specdoc_cmd()
        .args(["self-check", "--verbose"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("resolved"))
        .stdout(predicates::str::contains("resolved").not());
}
