//! # Domain
//!
//! Platform-independent core of the listing engine:
//!
//! - [`arena`]: fixed-capacity, offset-addressed region allocator
//! - [`credentials`]: memoized user/group names
//! - [`model`]: the [`Entry`] record
//! - [`format`]: size, date and index formatting
//! - [`layout`]: running column widths
//! - [`sort`]: name ordering

#![allow(clippy::multiple_crate_versions)]

pub mod arena;
pub mod credentials;
pub mod format;
pub mod layout;
pub mod model;
pub mod sort;

pub use arena::{Arena, Span};
pub use credentials::{CredentialCache, CredentialId, CredentialLimits};
pub use layout::ColumnWidths;
pub use model::Entry;
