// crates/usecase/src/listing.rs
use std::{io, path::Path, str};

use dirlist_domain::{Entry, layout::display_width, sort::sort_by_name};
use dirlist_ports::{
    filesystem::{DirectorySource, EntryStream},
    identity::IdentitySource,
    style::StyleSink,
};
use dirlist_shared_kernel::{ApplicationError, DirlistError, ErrorContext, Result};

use crate::{context::ListingContext, render::TableRenderer, resolver::EntryResolver};

/// What one listing produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSummary {
    pub entries: usize,
}

/// Use case: list one directory.
///
/// Enumerates the directory, resolves and measures every member, sorts them
/// by name and draws the table. The directory arenas of `ctx` are empty again
/// when this returns, whatever the outcome; the credential cache keeps what
/// it learned.
pub struct ListDirectory<'a> {
    source: &'a dyn DirectorySource,
    identities: &'a dyn IdentitySource,
}

impl<'a> ListDirectory<'a> {
    pub fn new(source: &'a dyn DirectorySource, identities: &'a dyn IdentitySource) -> Self {
        Self { source, identities }
    }

    /// # Errors
    ///
    /// An [`ApplicationError`] when `path` can not be listed (recoverable),
    /// a domain error when a bounded arena overflows or an infrastructure
    /// error when the sink fails (both fatal).
    pub fn run(&self, ctx: &mut ListingContext, path: &Path, sink: &mut dyn StyleSink) -> Result<ListingSummary> {
        let stream = self.source.list_entries(path).map_err(|err| self.classify_open_error(path, err))?;

        ctx.directory.reset();
        let outcome = self.list(ctx, path, stream, sink);
        ctx.directory.reset();
        outcome
    }

    fn list(
        &self,
        ctx: &mut ListingContext,
        path: &Path,
        stream: EntryStream<'_>,
        sink: &mut dyn StyleSink,
    ) -> Result<ListingSummary> {
        let resolver = EntryResolver::new(self.source, self.identities);
        for member in stream {
            let raw = match member {
                Ok(raw) => raw,
                Err(err) => {
                    log::debug!("skipping unreadable member of \"{}\": {err}", path.display());
                    continue;
                }
            };
            if let Some(entry) = resolver.resolve_entry(ctx, path, &raw)? {
                measure(ctx, &entry);
                ctx.directory.entries.push(entry)?;
            }
        }

        let count = ctx.directory.entries.used();
        ctx.directory.widths.observe_count(count);
        sort_by_name(ctx.directory.entries.as_mut_slice(), &ctx.directory.text);

        let absolute = self.source.resolve_absolute_path(path).unwrap_or_else(|err| {
            log::debug!("can not resolve \"{}\": {err}", path.display());
            path.to_path_buf()
        });
        TableRenderer::new(sink)
            .render(&absolute.display().to_string(), &ctx.directory, &ctx.credentials)
            .with_context(|| format!("can not draw the table of \"{}\"", absolute.display()))?;

        Ok(ListingSummary { entries: count })
    }

    /// Tells apart a missing path, an unreadable directory and a path that
    /// is not a directory at all.
    fn classify_open_error(&self, path: &Path, err: io::Error) -> DirlistError {
        let path = path.to_path_buf();
        let cause = match self.source.stat_entry(&path, true) {
            Err(_) => ApplicationError::PathNotFound { path },
            Ok(stat) if stat.mode.kind.is_dir() => ApplicationError::DirectoryNotOpenable { path, source: err },
            Ok(_) => ApplicationError::NotADirectory { path },
        };
        cause.into()
    }
}

/// Feeds one entry into the running column widths.
fn measure(ctx: &mut ListingContext, entry: &Entry) {
    let credentials = &ctx.credentials;
    let group_width = match (entry.group, entry.owner) {
        (Some(group), _) => Some(credentials.name_width(group)),
        (None, Some(owner)) => credentials.domain(owner).map(display_width),
        (None, None) => None,
    };
    let user_width = entry.owner.map(|owner| credentials.name_width(owner));
    let size = entry.size.and_then(|span| str::from_utf8(ctx.directory.text.get(span)).ok());
    ctx.directory.widths.observe(group_width, user_width, size);
}
