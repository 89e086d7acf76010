//! Report command specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Passing records render a document, a zero timing line, and a summary
#[test]
fn report_passing_records() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", PASSING_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("\nabs\n - neg→pos\n\nFinished in 0 seconds\n\n1 example, 0 failures\n");
}

/// > Any failed record exits with code 1
#[test]
fn report_failures_exit_one() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("3 examples, 1 failure"));
}

/// > Default grouping keeps a reappearing label as a separate group
#[test]
fn report_adjacent_grouping_by_default() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::starts_with(
            "\nL1\n - A\n\nL2\n - B\n     # later\n\nL1\n x C\n",
        ));
}

/// > --grouping label merges records under their first label
#[test]
fn report_label_grouping_flag() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json", "--grouping", "label"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::starts_with("\nL1\n - A\n x C\n\nL2\n - B\n     # later\n"));
}

/// > Records are read from stdin when no file is given
#[test]
fn report_reads_stdin() {
    let dir = temp_project();

    assert_cmd::Command::from_std(specdoc_cmd())
        .arg("report")
        .current_dir(dir.path())
        .write_stdin(PASSING_RECORDS)
        .assert()
        .success()
        .stdout(predicates::str::contains(" - neg→pos"));
}

/// > JSON output carries the tally
#[test]
fn report_json_output() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    let output = specdoc_cmd()
        .args(["report", "results.json", "-o", "json"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["examples"], 3);
    assert_eq!(value["summary"]["failures"], 1);
    assert_eq!(value["summary"]["pending"], 1);
    assert_eq!(value["groups"].as_array().unwrap().len(), 3);
}

/// > Malformed records are an error (exit 2)
#[test]
fn report_rejects_malformed_json() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", "[{\"group\": 1}]");

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read records"));
}

/// > A missing input file is an error (exit 2)
#[test]
fn report_missing_file() {
    let dir = temp_project();

    specdoc_cmd()
        .args(["report", "nope.json"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to open"));
}

/// > --color always emits escape codes, --no-color wins over it
#[test]
fn report_color_flags() {
    let dir = temp_project();
    write_file(dir.path(), "results.json", PASSING_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json", "--color", "always"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::contains("\x1b["));

    specdoc_cmd()
        .args(["report", "results.json", "--color", "always", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::contains("\x1b[").not());
}
