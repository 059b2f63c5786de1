// src/version.rs
//! Version and license text.
//!
//! The version constant uses `CARGO_PKG_VERSION` to stay in sync with the
//! version specified in `Cargo.toml`.

use std::env::consts::{ARCH, OS};

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Full license text printed by `--license`.
pub const LICENSE: &str = include_str!("../LICENSE");

fn platform_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// `dirlist <version> (compiled for <os> <arch>)`.
pub fn version_line() -> String {
    format!("dirlist {VERSION} (compiled for {} {ARCH})", platform_name(OS))
}
