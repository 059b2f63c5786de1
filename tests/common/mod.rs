// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// The binary with logging pinned to the default level, so an outer
/// `DIRLIST_LOG` does not leak into assertions.
pub fn dirlist() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dirlist"));
    command.env_remove("DIRLIST_LOG");
    command
}

/// A temporary directory populated with `files` as `(name, size)` pairs.
pub fn directory_with(files: &[(&str, usize)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for &(name, size) in files {
        write_sized(dir.path(), name, size);
    }
    dir
}

pub fn write_sized(dir: &Path, name: &str, size: usize) {
    fs::write(dir.join(name), vec![b'x'; size]).unwrap();
}

/// Table rows of the first listing in `stdout`, without header, column
/// header and rule.
pub fn rows(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout).lines().skip(3).map(str::to_owned).collect()
}
