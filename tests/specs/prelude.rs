//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the specdoc binary with a clean environment.
pub fn specdoc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("specdoc"));
    cmd.env_remove("SPECDOC_CONFIG")
        .env_remove("SPECDOC_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Creates an isolated project directory (its own git root) with no config.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Writes `content` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Records with a label that reappears after a different one.
pub const SPLIT_RECORDS: &str = r#"[
  {"group": "L1", "requirement": "A", "outcome": {"status": "success"}},
  {"group": "L2", "requirement": "B", "outcome": {"status": "pending", "reason": "later"}},
  {"group": "L1", "requirement": "C", "outcome": {"status": "fail"}}
]"#;

/// Records that all pass.
pub const PASSING_RECORDS: &str = r#"[
  {"group": "abs", "requirement": "neg→pos", "outcome": {"status": "success"}}
]"#;
