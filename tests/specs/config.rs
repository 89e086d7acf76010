//! Configuration specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > specdoc.toml in the working directory sets the grouping mode
#[test]
fn config_grouping_applies() {
    let dir = temp_project();
    write_file(dir.path(), "specdoc.toml", "version = 1\n[report]\ngrouping = \"label\"\n");
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::starts_with("\nL1\n - A\n x C\n"));
}

/// > Command-line flags override the config file
#[test]
fn flag_overrides_config() {
    let dir = temp_project();
    write_file(dir.path(), "specdoc.toml", "[report]\ngrouping = \"label\"\n");
    write_file(dir.path(), "results.json", SPLIT_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json", "--grouping", "adjacent"])
        .current_dir(dir.path())
        .assert()
        .stdout(predicates::str::starts_with("\nL1\n - A\n\nL2\n"));
}

/// > -C selects a config file explicitly
#[test]
fn explicit_config_path() {
    let dir = temp_project();
    write_file(dir.path(), "custom.toml", "[report]\nformat = \"json\"\n");
    write_file(dir.path(), "results.json", PASSING_RECORDS);

    specdoc_cmd()
        .args(["-C", "custom.toml", "report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"summary\""));
}

/// > An invalid config is an error (exit 2)
#[test]
fn invalid_config_fails() {
    let dir = temp_project();
    write_file(dir.path(), "specdoc.toml", "version = 7\n");
    write_file(dir.path(), "results.json", PASSING_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 7"));
}

/// > Unknown keys warn on stderr but do not fail
#[test]
fn unknown_config_key_warns() {
    let dir = temp_project();
    write_file(dir.path(), "specdoc.toml", "[report]\nwidth = 80\n");
    write_file(dir.path(), "results.json", PASSING_RECORDS);

    specdoc_cmd()
        .args(["report", "results.json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("report.width"));
}
