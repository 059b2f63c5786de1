// crates/domain/src/model/entry.rs
use dirlist_shared_kernel::{EntryKind, Mode};

use crate::{arena::Span, credentials::CredentialId};

/// One directory member, as stored in the per-directory entry arena.
///
/// String fields are spans into the directory's text arena. An entry is
/// written once by the resolver and only read afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entry {
    pub name: Span,
    /// Present exactly when `mode.kind` is [`EntryKind::Symlink`].
    pub link_target: Option<Span>,
    /// Formatted size; absent for directories.
    pub size: Option<Span>,
    pub owner: Option<CredentialId>,
    pub group: Option<CredentialId>,
    /// Modification time in seconds since the Unix epoch.
    pub modified: Option<i64>,
    pub mode: Mode,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        self.mode.kind
    }

    pub fn is_symlink(&self) -> bool {
        self.mode.kind.is_symlink()
    }
}
