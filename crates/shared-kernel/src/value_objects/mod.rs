// crates/shared-kernel/src/value_objects/mod.rs
pub mod identity;
pub mod mode;

pub use identity::{Identity, IdentityId, Namespace};
pub use mode::{AccessBits, Attributes, EntryKind, Mode, Permissions};
