// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DirlistError, DomainError, DomainResult, ErrorContext, InfrastructureError, PresentationError,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{AccessBits, Attributes, EntryKind, Identity, IdentityId, Mode, Namespace, Permissions};
