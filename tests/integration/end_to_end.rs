// tests/integration/end_to_end.rs
use std::{
    fs,
    process::{Command, Stdio},
};

use predicates::prelude::*;

use crate::common::{directory_with, dirlist, rows};

#[test]
fn one_mebibyte_file_renders_as_1mb() {
    let dir = directory_with(&[("blob.bin", 1_048_576)]);

    let output = dirlist().arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    let rows = rows(&output.stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains(" 1MB "), "{}", rows[0]);
    assert!(rows[0].ends_with(" r blob.bin"), "{}", rows[0]);
}

#[test]
fn header_shows_canonical_path() {
    let dir = directory_with(&[]);
    fs::create_dir(dir.path().join("inner")).unwrap();
    let canonical = fs::canonicalize(dir.path()).unwrap();

    dirlist()
        .arg(dir.path().join("inner").join(".."))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}:\n", canonical.display())));
}

#[test]
fn missing_path_warns_and_lists_the_rest() {
    let dir = directory_with(&[("kept.txt", 3)]);
    let missing = dir.path().join("does-not-exist");

    let output = dirlist().arg(&missing).arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[WARNING] dirlist: can not find the entry"), "{stderr}");
    assert!(stderr.contains(&missing.display().to_string()), "{stderr}");
    assert!(String::from_utf8_lossy(&output.stdout).contains("kept.txt"));
}

#[test]
fn regular_file_argument_is_not_a_directory() {
    let dir = directory_with(&[("plain.txt", 1)]);

    dirlist()
        .arg(dir.path().join("plain.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a directory."));
}

#[test]
fn unknown_flag_warns_and_still_lists() {
    let dir = directory_with(&[("still-here", 0)]);

    dirlist()
        .current_dir(dir.path())
        .arg("--bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("still-here"))
        .stderr(predicate::str::contains("the option \"--bogus\" is unrecognized."));
}

#[test]
fn empty_directory_shows_sentinel() {
    let dir = directory_with(&[]);

    let output = dirlist().arg(dir.path()).output().unwrap();

    assert!(output.status.success());
    let rows = rows(&output.stdout);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trim_start(), "DIRECTORY IS EMPTY");
}

#[test]
fn entries_are_sorted_bytewise_and_numbered() {
    let dir = directory_with(&[("b", 1), ("a", 1), ("C", 1)]);

    let output = dirlist().arg(dir.path()).output().unwrap();

    let rows = rows(&output.stdout);
    let names: Vec<_> = rows.iter().map(|row| row.rsplit(' ').next().unwrap().to_owned()).collect();
    assert_eq!(names, ["C", "a", "b"]);
    let numbers: Vec<_> = rows.iter().map(|row| row.split_whitespace().next().unwrap().to_owned()).collect();
    assert_eq!(numbers, ["1", "2", "3"]);
}

#[test]
fn redirected_output_has_no_escape_sequences() {
    let dir = directory_with(&[("plain", 10)]);
    fs::create_dir(dir.path().join("folder")).unwrap();

    let output = dirlist().arg(dir.path()).output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains(" d folder"), "{stdout}");
    assert!(stdout.contains(" r plain"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn symlinks_show_their_target() {
    let dir = directory_with(&[("real", 1)]);
    std::os::unix::fs::symlink("real", dir.path().join("alias")).unwrap();

    let output = dirlist().arg(dir.path()).output().unwrap();

    let rows = rows(&output.stdout);
    assert!(rows.iter().any(|row| row.ends_with(" l alias -> real")), "{rows:?}");
}

#[cfg(unix)]
#[test]
fn permissions_render_symbolic_and_octal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = directory_with(&[("tool", 1)]);
    fs::set_permissions(dir.path().join("tool"), fs::Permissions::from_mode(0o754)).unwrap();

    let output = dirlist().arg(dir.path()).output().unwrap();

    assert!(rows(&output.stdout)[0].contains(" rwxr-xr-- 754 r tool"));
}

#[test]
fn several_directories_are_listed_in_argument_order() {
    let first = directory_with(&[("from-first", 1)]);
    let second = directory_with(&[("from-second", 1)]);

    let output = dirlist().arg(first.path()).arg(second.path()).output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find("from-first").unwrap();
    let b = stdout.find("from-second").unwrap();
    assert!(a < b);
    assert_eq!(stdout.matches("Modified Date").count(), 2);
}

#[test]
fn debug_level_is_opt_in() {
    let dir = directory_with(&[("x", 1)]);

    dirlist()
        .env("DIRLIST_LOG", "debug")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG] dirlist: listed 1 entries"));
}

#[test]
fn closed_stdout_ends_quietly() {
    let dir = directory_with(&[]);
    for n in 0..2_000 {
        fs::write(dir.path().join(format!("file-{n:04}.txt")), b"").unwrap();
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_dirlist"))
        .env_remove("DIRLIST_LOG")
        .arg(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();

    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.status.success());
}

#[test]
fn log_variable_can_not_hide_warnings() {
    let dir = directory_with(&[]);

    dirlist()
        .env("DIRLIST_LOG", "off")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("[WARNING] dirlist: can not find the entry"));
}

#[test]
fn known_switch_with_value_is_a_warning() {
    let dir = directory_with(&[("kept.txt", 1)]);

    dirlist()
        .arg("--version=3")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("kept.txt"))
        .stderr(predicate::str::contains("the option \"--version=3\" is unrecognized."));
}
