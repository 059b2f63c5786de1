// crates/infra/src/filesystem.rs
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use dirlist_ports::filesystem::{DirectorySource, EntryStat, EntryStream, RawEntry, os_str_bytes};

use crate::platform;

/// Filesystem adapter implementing the `DirectorySource` port on top of
/// `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectorySource;

impl StdDirectorySource {
    pub fn new() -> Self {
        Self
    }
}

impl DirectorySource for StdDirectorySource {
    fn list_entries<'a>(&'a self, path: &Path) -> io::Result<EntryStream<'a>> {
        let members = fs::read_dir(path)?.map(|member| {
            let member = member?;
            // The stream's own type is only a hint; a failure here is not fatal.
            let kind_hint = member.file_type().ok().map(platform::kind_of);
            Ok(RawEntry::new(member.file_name(), kind_hint))
        });
        Ok(Box::new(members))
    }

    fn stat_entry(&self, path: &Path, follow_links: bool) -> io::Result<EntryStat> {
        let metadata = if follow_links { fs::metadata(path)? } else { fs::symlink_metadata(path)? };
        Ok(platform::entry_stat(path, &metadata))
    }

    fn read_link_target(&self, path: &Path) -> io::Result<Vec<u8>> {
        let target = fs::read_link(path)?;
        Ok(os_str_bytes(target.as_os_str()).into_owned())
    }

    fn resolve_absolute_path(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path).map(platform::display_path)
    }
}
