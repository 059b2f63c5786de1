// tests/integration/smoke.rs
use predicates::prelude::*;

use crate::common::dirlist;

#[test]
fn shows_help() {
    dirlist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: dirlist").and(predicate::str::contains("--license")));
}

#[test]
fn shows_version_and_platform() {
    dirlist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^dirlist \d+\.\d+\.\d+ \(compiled for \S+ \S+\)\n$").unwrap());
}

#[test]
fn shows_license() {
    dirlist().arg("--license").assert().success().stdout(predicate::str::starts_with("MIT License"));
}

#[test]
fn lists_current_directory_without_arguments() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("here.txt"), b"hi").unwrap();

    dirlist()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("here.txt"))
        .stderr(predicate::str::is_empty());
}
