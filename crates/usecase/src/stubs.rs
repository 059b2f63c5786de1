// crates/usecase/src/stubs.rs
//! In-memory port implementations shared by the use-case tests.

use std::{
    cell::Cell,
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use dirlist_ports::{
    filesystem::{DirectorySource, EntryStat, EntryStream, RawEntry},
    identity::IdentitySource,
    style::{Color, StyleSink, Weight},
};
use dirlist_shared_kernel::{EntryKind, Identity, IdentityId, Mode, Namespace, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEvent {
    Color(Color),
    Weight(Weight),
    Underline(bool),
    Text(String),
}

/// Records every call instead of drawing anything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<StyleEvent>,
    redirected: bool,
}

impl RecordingSink {
    pub fn redirected() -> Self {
        Self { events: Vec::new(), redirected: true }
    }

    pub fn interactive() -> Self {
        Self { events: Vec::new(), redirected: false }
    }

    /// Everything written, with styles dropped.
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                StyleEvent::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn saw_color(&self, color: Color) -> bool {
        self.events.contains(&StyleEvent::Color(color))
    }

    pub fn saw_weight(&self, weight: Weight) -> bool {
        self.events.contains(&StyleEvent::Weight(weight))
    }
}

impl StyleSink for RecordingSink {
    fn set_color(&mut self, color: Color) -> Result<()> {
        self.events.push(StyleEvent::Color(color));
        Ok(())
    }

    fn set_weight(&mut self, weight: Weight) -> Result<()> {
        self.events.push(StyleEvent::Weight(weight));
        Ok(())
    }

    fn set_underline(&mut self, on: bool) -> Result<()> {
        self.events.push(StyleEvent::Underline(on));
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.events.push(StyleEvent::Text(text.to_owned()));
        Ok(())
    }

    fn is_redirected(&self) -> bool {
        self.redirected
    }
}

/// A file tree held in maps. Paths are used exactly as given.
#[derive(Debug, Default)]
pub struct StubSource {
    directories: HashMap<PathBuf, Vec<RawEntry>>,
    unreadable: HashMap<PathBuf, io::ErrorKind>,
    stats: HashMap<PathBuf, EntryStat>,
    links: HashMap<PathBuf, Vec<u8>>,
}

impl StubSource {
    pub fn directory(mut self, path: &str) -> Self {
        self.directories.entry(path.into()).or_default();
        self.stats.insert(path.into(), EntryStat { mode: Mode::posix(EntryKind::Directory, 0o755), ..EntryStat::default() });
        self
    }

    /// A directory that exists but whose stream can not be opened.
    pub fn locked_directory(mut self, path: &str) -> Self {
        self.unreadable.insert(path.into(), io::ErrorKind::PermissionDenied);
        self.stats.insert(path.into(), EntryStat { mode: Mode::posix(EntryKind::Directory, 0o000), ..EntryStat::default() });
        self
    }

    /// Adds a member to `directory` with the given metadata.
    pub fn file(mut self, directory: &str, name: &str, stat: EntryStat) -> Self {
        let kind = stat.mode.kind;
        self.push_member(directory, name, Some(kind));
        self.stats.insert(Path::new(directory).join(name), stat);
        self
    }

    /// Adds a member that shows up in the stream but fails to stat.
    pub fn vanished(mut self, directory: &str, name: &str, hint: Option<EntryKind>) -> Self {
        self.push_member(directory, name, hint);
        self
    }

    pub fn symlink(mut self, directory: &str, name: &str, target: &[u8]) -> Self {
        let stat = EntryStat { size: target.len() as u64, mode: Mode::posix(EntryKind::Symlink, 0o777), ..EntryStat::default() };
        self.links.insert(Path::new(directory).join(name), target.to_vec());
        self.file(directory, name, stat)
    }

    /// A plain file passed directly as a listing argument.
    pub fn lone_file(mut self, path: &str) -> Self {
        self.stats.insert(path.into(), EntryStat { mode: Mode::posix(EntryKind::Regular, 0o644), ..EntryStat::default() });
        self
    }

    fn push_member(&mut self, directory: &str, name: &str, hint: Option<EntryKind>) {
        self.directories.entry(directory.into()).or_default().push(RawEntry::new(name, hint));
    }
}

impl DirectorySource for StubSource {
    fn list_entries<'a>(&'a self, path: &Path) -> io::Result<EntryStream<'a>> {
        if let Some(kind) = self.unreadable.get(path) {
            return Err(io::Error::from(*kind));
        }
        match self.directories.get(path) {
            Some(members) => Ok(Box::new(members.iter().cloned().map(Ok))),
            None if self.stats.contains_key(path) => Err(io::Error::other("not a directory")),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn stat_entry(&self, path: &Path, _follow_links: bool) -> io::Result<EntryStat> {
        self.stats.get(path).cloned().ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn read_link_target(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.links.get(path).cloned().ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))
    }

    fn resolve_absolute_path(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(Path::new("/stub").join(path))
    }
}

/// Identity database backed by a map, counting every lookup.
#[derive(Debug, Default)]
pub struct StubIdentities {
    known: HashMap<(Namespace, IdentityId), Identity>,
    pub lookups: Cell<usize>,
}

impl StubIdentities {
    pub fn with(mut self, namespace: Namespace, id: u32, name: &str) -> Self {
        self.known.insert((namespace, IdentityId::Numeric(id)), Identity::named(name));
        self
    }

    /// Renames an id, as if the system database changed mid-run.
    pub fn rename(&mut self, namespace: Namespace, id: u32, name: &str) {
        self.known.insert((namespace, IdentityId::Numeric(id)), Identity::named(name));
    }
}

impl IdentitySource for StubIdentities {
    fn lookup(&self, namespace: Namespace, id: &IdentityId) -> Option<Identity> {
        self.lookups.set(self.lookups.get() + 1);
        self.known.get(&(namespace, id.clone())).cloned()
    }
}

pub fn regular(size: u64, owner: u32, group: u32) -> EntryStat {
    EntryStat {
        size,
        modified: Some(1_700_000_000),
        mode: Mode::posix(EntryKind::Regular, 0o644),
        owner: Some(IdentityId::Numeric(owner)),
        group: Some(IdentityId::Numeric(group)),
    }
}

pub fn directory(owner: u32, group: u32) -> EntryStat {
    EntryStat { size: 4096, mode: Mode::posix(EntryKind::Directory, 0o755), ..regular(0, owner, group) }
}
