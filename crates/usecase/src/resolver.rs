// crates/usecase/src/resolver.rs
use std::path::Path;

use dirlist_domain::{Arena, CredentialCache, CredentialId, Entry, Span, format::format_size};
use dirlist_ports::{
    filesystem::{DirectorySource, RawEntry},
    identity::IdentitySource,
};
use dirlist_shared_kernel::{DomainResult, IdentityId, Mode, Namespace, Result};

use crate::context::ListingContext;

/// Appended to link targets cut at the length limit.
pub const TRUNCATION_MARKER: &[u8] = b"...";
/// Stored when a symlink's target can not be read.
pub const UNREADABLE_TARGET: &[u8] = b"?";

/// Builds [`Entry`] records from raw directory members.
pub struct EntryResolver<'a> {
    source: &'a dyn DirectorySource,
    identities: &'a dyn IdentitySource,
}

impl<'a> EntryResolver<'a> {
    pub fn new(source: &'a dyn DirectorySource, identities: &'a dyn IdentitySource) -> Self {
        Self { source, identities }
    }

    /// Resolves one member of `directory`. Returns `Ok(None)` for `.` and
    /// `..`.
    ///
    /// A failing stat does not fail the entry: it is listed with its name,
    /// the type reported by the directory stream and no other metadata.
    ///
    /// # Errors
    ///
    /// Only when a bounded arena overflows.
    pub fn resolve_entry(&self, ctx: &mut ListingContext, directory: &Path, raw: &RawEntry) -> Result<Option<Entry>> {
        if raw.is_dot_or_dot_dot() {
            return Ok(None);
        }

        let path = directory.join(&raw.name);
        let stat = match self.source.stat_entry(&path, false) {
            Ok(stat) => Some(stat),
            Err(err) => {
                log::debug!("can not stat \"{}\": {err}", path.display());
                None
            }
        };
        let mode = stat
            .as_ref()
            .map_or_else(|| Mode::posix(raw.kind_hint.unwrap_or_default(), 0), |stat| stat.mode);

        let ListingContext { credentials, directory: arenas, .. } = ctx;
        let name = arenas.text.push_slice(&raw.name_bytes())?;

        let link_target = if mode.kind.is_symlink() {
            let target = self.source.read_link_target(&path).unwrap_or_else(|err| {
                log::debug!("can not read link \"{}\": {err}", path.display());
                UNREADABLE_TARGET.to_vec()
            });
            Some(stage_link_target(&mut arenas.scratch, &mut arenas.text, &target)?)
        } else {
            None
        };

        let (owner, group, size, modified) = match &stat {
            Some(stat) => {
                let owner = self.credential(credentials, Namespace::User, stat.owner.as_ref())?;
                let group = self.credential(credentials, Namespace::Group, stat.group.as_ref())?;
                let size = format_size(stat.size, mode.kind.is_dir())
                    .map(|size| arenas.text.push_slice(size.as_bytes()))
                    .transpose()?;
                (owner, group, size, stat.modified)
            }
            None => (None, None, None, None),
        };

        Ok(Some(Entry { name, link_target, size, owner, group, modified, mode }))
    }

    fn credential(
        &self,
        cache: &mut CredentialCache,
        namespace: Namespace,
        id: Option<&IdentityId>,
    ) -> DomainResult<Option<CredentialId>> {
        let Some(id) = id else {
            return Ok(None);
        };
        cache.resolve(namespace, id, |namespace, id| self.identities.lookup(namespace, id))
    }
}

/// Copies a link target into the text arena by way of the scratch arena,
/// cutting it at the scratch capacity and marking the cut.
fn stage_link_target(scratch: &mut Arena<u8>, text: &mut Arena<u8>, target: &[u8]) -> DomainResult<Span> {
    let limit = scratch.remaining();
    let staging = scratch.allocate(limit)?;
    let buffer = scratch.get_mut(staging);

    let kept = if target.len() > limit {
        let cut = limit.saturating_sub(TRUNCATION_MARKER.len());
        buffer[..cut].copy_from_slice(&target[..cut]);
        let marker_len = TRUNCATION_MARKER.len().min(limit);
        buffer[cut..cut + marker_len].copy_from_slice(&TRUNCATION_MARKER[..marker_len]);
        cut + marker_len
    } else {
        buffer[..target.len()].copy_from_slice(target);
        target.len()
    };

    let span = text.push_slice(&scratch.get(staging)[..kept]);
    scratch.deallocate_top(limit)?;
    span
}
