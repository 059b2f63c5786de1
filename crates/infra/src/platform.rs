// crates/infra/src/platform.rs
//! Platform-specific metadata extraction.
//!
//! This module centralizes OS-specific logic so the adapters above it stay
//! free of scattered conditional compilation. Unix reports POSIX modes and
//! numeric owners; Windows reports attribute flags and an owner SID.

use std::{fs, path::Path};

use dirlist_ports::filesystem::EntryStat;
use dirlist_shared_kernel::EntryKind;

// ============================================================================
// Entry kinds
// ============================================================================

/// Maps a file type to the listing's type tag.
#[cfg(unix)]
pub fn kind_of(file_type: fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_block_device() {
        EntryKind::BlockDevice
    } else if file_type.is_char_device() {
        EntryKind::CharDevice
    } else if file_type.is_fifo() {
        EntryKind::Fifo
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else {
        EntryKind::Regular
    }
}

#[cfg(not(unix))]
pub fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Regular
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Builds an [`EntryStat`] from already-read metadata of `path`.
#[cfg(unix)]
pub fn entry_stat(_path: &Path, metadata: &fs::Metadata) -> EntryStat {
    use std::os::unix::fs::MetadataExt;

    use dirlist_shared_kernel::{IdentityId, Mode};

    EntryStat {
        size: metadata.size(),
        modified: Some(metadata.mtime()),
        mode: Mode::posix(kind_of(metadata.file_type()), metadata.mode()),
        owner: Some(IdentityId::Numeric(metadata.uid())),
        group: Some(IdentityId::Numeric(metadata.gid())),
    }
}

#[cfg(windows)]
pub fn entry_stat(path: &Path, metadata: &fs::Metadata) -> EntryStat {
    use std::os::windows::fs::MetadataExt;

    use dirlist_shared_kernel::{AccessBits, IdentityId, Mode};

    let owner = match crate::win32::owner_sid(path) {
        Ok(sid) => Some(IdentityId::Sid(sid)),
        Err(err) => {
            log::debug!("can not read the owner of \"{}\": {err}", path.display());
            None
        }
    };

    EntryStat {
        size: metadata.file_size(),
        modified: modified_seconds(metadata),
        mode: Mode::new(
            kind_of(metadata.file_type()),
            AccessBits::Attributes(attributes_from_raw(metadata.file_attributes())),
        ),
        owner,
        group: None,
    }
}

#[cfg(not(any(unix, windows)))]
pub fn entry_stat(_path: &Path, metadata: &fs::Metadata) -> EntryStat {
    use dirlist_shared_kernel::Mode;

    let mode = if metadata.permissions().readonly() { 0o444 } else { 0o644 };
    EntryStat {
        size: metadata.len(),
        modified: modified_seconds(metadata),
        mode: Mode::posix(kind_of(metadata.file_type()), mode),
        owner: None,
        group: None,
    }
}

#[cfg(not(unix))]
fn modified_seconds(metadata: &fs::Metadata) -> Option<i64> {
    let since_epoch = metadata.modified().ok()?.duration_since(std::time::UNIX_EPOCH).ok()?;
    i64::try_from(since_epoch.as_secs()).ok()
}

// ============================================================================
// Windows attributes
// ============================================================================

const FILE_ATTRIBUTE_READONLY: u32 = 0x1;
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
const FILE_ATTRIBUTE_ARCHIVE: u32 = 0x20;
const FILE_ATTRIBUTE_TEMPORARY: u32 = 0x100;
const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;

/// Keeps the five attribute flags the listing shows.
pub fn attributes_from_raw(raw: u32) -> dirlist_shared_kernel::Attributes {
    use dirlist_shared_kernel::Attributes;

    [
        (FILE_ATTRIBUTE_HIDDEN, Attributes::HIDDEN),
        (FILE_ATTRIBUTE_ARCHIVE, Attributes::ARCHIVE),
        (FILE_ATTRIBUTE_READONLY, Attributes::READONLY),
        (FILE_ATTRIBUTE_TEMPORARY, Attributes::TEMPORARY),
        (FILE_ATTRIBUTE_REPARSE_POINT, Attributes::REPARSE_POINT),
    ]
    .into_iter()
    .filter(|&(bit, _)| raw & bit != 0)
    .fold(Attributes::empty(), |acc, (_, flag)| acc.with(flag))
}

// ============================================================================
// Path display
// ============================================================================

/// Drops the `\\?\` prefix `canonicalize` adds on Windows.
#[cfg(windows)]
pub fn display_path(path: std::path::PathBuf) -> std::path::PathBuf {
    use std::path::PathBuf;

    const VERBATIM_UNC: &str = r"\\?\UNC\";
    const VERBATIM: &str = r"\\?\";

    let Some(text) = path.to_str() else {
        return path;
    };
    if let Some(rest) = text.strip_prefix(VERBATIM_UNC) {
        PathBuf::from(format!(r"\\{rest}"))
    } else if let Some(rest) = text.strip_prefix(VERBATIM) {
        PathBuf::from(rest)
    } else {
        path
    }
}

#[cfg(not(windows))]
pub fn display_path(path: std::path::PathBuf) -> std::path::PathBuf {
    path
}
