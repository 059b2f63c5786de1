// crates/usecase/src/context.rs
use dirlist_domain::{Arena, ColumnWidths, CredentialCache, CredentialLimits, Entry};

/// Capacities of every bounded region used by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaLimits {
    pub credentials: CredentialLimits,
    /// Entries per directory.
    pub entries: usize,
    /// Bytes of names, link targets and sizes per directory.
    pub text_bytes: usize,
    /// Longest link target kept verbatim; longer ones are truncated.
    pub link_target_bytes: usize,
}

impl Default for ArenaLimits {
    fn default() -> Self {
        Self {
            credentials: CredentialLimits::default(),
            entries: 30_000,
            text_bytes: 2 * 1024 * 1024,
            link_target_bytes: 4095,
        }
    }
}

/// Regions holding one directory's worth of data. Reset, not freed, between
/// directories.
#[derive(Debug)]
pub struct DirectoryArenas {
    pub entries: Arena<Entry>,
    pub text: Arena<u8>,
    /// Stack-like staging area; every allocation is released before the next.
    pub scratch: Arena<u8>,
    pub widths: ColumnWidths,
}

impl DirectoryArenas {
    fn new(limits: &ArenaLimits) -> Self {
        Self {
            entries: Arena::new("entries", limits.entries),
            text: Arena::new("entry text", limits.text_bytes),
            scratch: Arena::new("scratch", limits.link_target_bytes),
            widths: ColumnWidths::default(),
        }
    }

    pub fn reset(&mut self) {
        self.entries.reset();
        self.text.reset();
        self.scratch.reset();
        self.widths = ColumnWidths::default();
    }
}

/// State shared by every directory of one run. The credential cache lives
/// for the whole run; the directory arenas are reused.
#[derive(Debug)]
pub struct ListingContext {
    pub credentials: CredentialCache,
    pub directory: DirectoryArenas,
    limits: ArenaLimits,
}

impl ListingContext {
    pub fn new(limits: ArenaLimits) -> Self {
        Self {
            credentials: CredentialCache::new(limits.credentials),
            directory: DirectoryArenas::new(&limits),
            limits,
        }
    }

    pub fn limits(&self) -> &ArenaLimits {
        &self.limits
    }
}

impl Default for ListingContext {
    fn default() -> Self {
        Self::new(ArenaLimits::default())
    }
}
