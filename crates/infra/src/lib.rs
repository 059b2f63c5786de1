//! # Infrastructure
//!
//! Concrete adapters for the ports:
//!
//! - [`filesystem`]: `std::fs` directory streams and metadata
//! - [`identity`]: system user/group (or account) names
//! - [`terminal`]: ANSI styled output
//! - [`logging`]: stderr diagnostics for the `log` facade
//! - [`platform`]: OS-specific metadata extraction

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
pub mod logging;
pub mod platform;
pub mod terminal;
#[cfg(windows)]
mod win32;

pub use filesystem::StdDirectorySource;
pub use identity::SystemIdentitySource;
pub use terminal::TerminalStyleSink;
