// crates/ports/src/filesystem.rs
use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
};

use dirlist_shared_kernel::{EntryKind, IdentityId, Mode};

/// One member of a directory stream, before any metadata is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    /// Type reported by the directory stream itself, when the platform
    /// provides one without an extra stat.
    pub kind_hint: Option<EntryKind>,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, kind_hint: Option<EntryKind>) -> Self {
        Self { name: name.into(), kind_hint }
    }

    /// `.` and `..` are never listed.
    pub fn is_dot_or_dot_dot(&self) -> bool {
        let name = self.name.as_os_str();
        name == OsStr::new(".") || name == OsStr::new("..")
    }

    /// Raw name bytes; lossy on platforms whose names are not byte strings.
    pub fn name_bytes(&self) -> Cow<'_, [u8]> {
        os_str_bytes(&self.name)
    }
}

#[cfg(unix)]
pub fn os_str_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(value.as_bytes())
}

#[cfg(not(unix))]
pub fn os_str_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    match value.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Metadata of a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryStat {
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub modified: Option<i64>,
    pub mode: Mode,
    pub owner: Option<IdentityId>,
    pub group: Option<IdentityId>,
}

pub type EntryStream<'a> = Box<dyn Iterator<Item = io::Result<RawEntry>> + 'a>;

/// Port for reading directories and entry metadata.
pub trait DirectorySource {
    /// Opens a directory stream. Entries are produced lazily.
    fn list_entries<'a>(&'a self, path: &Path) -> io::Result<EntryStream<'a>>;

    /// Reads metadata. With `follow_links == false` a symlink describes
    /// itself rather than its target.
    fn stat_entry(&self, path: &Path, follow_links: bool) -> io::Result<EntryStat>;

    /// Target of a symbolic link, as raw bytes.
    fn read_link_target(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Absolute path with every symlink resolved.
    fn resolve_absolute_path(&self, path: &Path) -> io::Result<PathBuf>;
}
