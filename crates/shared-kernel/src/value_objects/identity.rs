// crates/shared-kernel/src/value_objects/identity.rs
use std::fmt;

/// Which identity database an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    User,
    Group,
}

/// Platform identifier of an owner: a uid/gid, or a Windows string SID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityId {
    Numeric(u32),
    Sid(String),
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Sid(sid) => f.write_str(sid),
        }
    }
}

/// A name returned by the identity database. `domain` is only reported for
/// Windows accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub domain: Option<String>,
}

impl Identity {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), domain: None }
    }

    pub fn with_domain(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self { name: name.into(), domain: Some(domain.into()) }
    }
}
