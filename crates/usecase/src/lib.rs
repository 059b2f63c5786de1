//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to list one
//! directory at a time:
//!
//! - [`context`]: arenas and credential cache owned by a run
//! - [`resolver`]: turns a raw directory member into an [`Entry`](dirlist_domain::Entry)
//! - [`listing`]: enumerate, resolve, measure, sort and render one directory
//! - [`render`]: the table drawn on a [`StyleSink`](dirlist_ports::style::StyleSink)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod listing;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod stubs;

pub use context::{ArenaLimits, ListingContext};
pub use listing::{ListDirectory, ListingSummary};
