// crates/domain/src/credentials.rs
//! Process-wide memo of owner names.
//!
//! The first successful lookup of an id is copied into the cache's arenas and
//! every later lookup of that id returns the stored copy, even if the system
//! database changed in between. Failed lookups are not cached.
//!
//! Names, Windows SID keys and account domains live in separate arenas, so
//! long SIDs never eat into the room reserved for names.

use std::str;

use dirlist_shared_kernel::{DomainResult, Identity, IdentityId, Namespace};

use crate::{
    arena::{Arena, Span},
    layout::display_width,
};

/// Capacities of one namespace table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialLimits {
    pub records: usize,
    pub name_bytes: usize,
    /// String SIDs (`S-1-5-21-...`); unused where ids are numeric.
    pub sid_bytes: usize,
    pub domain_bytes: usize,
}

impl Default for CredentialLimits {
    fn default() -> Self {
        Self { records: 20, name_bytes: 320, sid_bytes: 20 * 64, domain_bytes: 320 }
    }
}

/// Arena labels of one namespace, as they appear in overflow diagnostics.
struct TableLabels {
    records: &'static str,
    names: &'static str,
    sids: &'static str,
    domains: &'static str,
}

const USER_LABELS: TableLabels =
    TableLabels { records: "user credentials", names: "user names", sids: "user sids", domains: "user domains" };
const GROUP_LABELS: TableLabels =
    TableLabels { records: "group credentials", names: "group names", sids: "group sids", domains: "group domains" };

/// Handle to a cached credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId {
    namespace: Namespace,
    index: usize,
}

impl CredentialId {
    pub fn namespace(self) -> Namespace {
        self.namespace
    }
}

#[derive(Debug, Clone, Copy)]
enum StoredKey {
    Numeric(u32),
    Sid(Span),
}

impl Default for StoredKey {
    fn default() -> Self {
        Self::Numeric(0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Credential {
    key: StoredKey,
    name: Span,
    name_width: usize,
    domain: Option<Span>,
}

#[derive(Debug)]
struct Table {
    records: Arena<Credential>,
    names: Arena<u8>,
    sids: Arena<u8>,
    domains: Arena<u8>,
}

impl Table {
    fn new(labels: &TableLabels, limits: CredentialLimits) -> Self {
        Self {
            records: Arena::new(labels.records, limits.records),
            names: Arena::new(labels.names, limits.name_bytes),
            sids: Arena::new(labels.sids, limits.sid_bytes),
            domains: Arena::new(labels.domains, limits.domain_bytes),
        }
    }

    fn find(&self, id: &IdentityId) -> Option<usize> {
        self.records.as_slice().iter().position(|record| match (record.key, id) {
            (StoredKey::Numeric(stored), IdentityId::Numeric(wanted)) => stored == *wanted,
            (StoredKey::Sid(span), IdentityId::Sid(wanted)) => self.sids.get(span) == wanted.as_bytes(),
            _ => false,
        })
    }

    fn insert(&mut self, id: &IdentityId, identity: &Identity) -> DomainResult<usize> {
        let key = match id {
            IdentityId::Numeric(value) => StoredKey::Numeric(*value),
            IdentityId::Sid(sid) => StoredKey::Sid(self.sids.push_slice(sid.as_bytes())?),
        };
        let name = self.names.push_slice(identity.name.as_bytes())?;
        let domain = identity
            .domain
            .as_ref()
            .map(|domain| self.domains.push_slice(domain.as_bytes()))
            .transpose()?;
        self.records.push(Credential { key, name, name_width: display_width(&identity.name), domain })
    }

    fn name(&self, record: &Credential) -> &str {
        as_str(&self.names, record.name)
    }

    fn domain(&self, record: &Credential) -> Option<&str> {
        record.domain.map(|span| as_str(&self.domains, span))
    }
}

/// Spans only ever cover bytes copied from a `String`.
fn as_str(arena: &Arena<u8>, span: Span) -> &str {
    str::from_utf8(arena.get(span)).unwrap_or_default()
}

/// Memoized user and group names, one bounded table per [`Namespace`].
#[derive(Debug)]
pub struct CredentialCache {
    users: Table,
    groups: Table,
}

impl CredentialCache {
    pub fn new(limits: CredentialLimits) -> Self {
        Self {
            users: Table::new(&USER_LABELS, limits),
            groups: Table::new(&GROUP_LABELS, limits),
        }
    }

    fn table(&self, namespace: Namespace) -> &Table {
        match namespace {
            Namespace::User => &self.users,
            Namespace::Group => &self.groups,
        }
    }

    fn table_mut(&mut self, namespace: Namespace) -> &mut Table {
        match namespace {
            Namespace::User => &mut self.users,
            Namespace::Group => &mut self.groups,
        }
    }

    /// Returns the cached credential for `id`, calling `lookup` only on a
    /// miss. `Ok(None)` means the id has no name; nothing is stored for it.
    ///
    /// # Errors
    ///
    /// Fails when the namespace table is full.
    pub fn resolve<F>(&mut self, namespace: Namespace, id: &IdentityId, lookup: F) -> DomainResult<Option<CredentialId>>
    where
        F: FnOnce(Namespace, &IdentityId) -> Option<Identity>,
    {
        if let Some(index) = self.table(namespace).find(id) {
            return Ok(Some(CredentialId { namespace, index }));
        }
        let Some(identity) = lookup(namespace, id) else {
            return Ok(None);
        };
        let index = self.table_mut(namespace).insert(id, &identity)?;
        Ok(Some(CredentialId { namespace, index }))
    }

    fn record(&self, id: CredentialId) -> Option<(&Table, &Credential)> {
        let table = self.table(id.namespace);
        table.records.item(id.index).map(|record| (table, record))
    }

    pub fn name(&self, id: CredentialId) -> &str {
        self.record(id).map(|(table, record)| table.name(record)).unwrap_or_default()
    }

    pub fn domain(&self, id: CredentialId) -> Option<&str> {
        let (table, record) = self.record(id)?;
        table.domain(record)
    }

    /// Display width of the name, in terminal cells.
    pub fn name_width(&self, id: CredentialId) -> usize {
        self.record(id).map_or(0, |(_, record)| record.name_width)
    }

    pub fn len(&self, namespace: Namespace) -> usize {
        self.table(namespace).records.used()
    }

    pub fn is_empty(&self) -> bool {
        self.users.records.is_empty() && self.groups.records.is_empty()
    }
}

impl Default for CredentialCache {
    fn default() -> Self {
        Self::new(CredentialLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dirlist_shared_kernel::DomainError;

    use super::*;

    #[test]
    fn second_resolve_hits_cache() {
        let mut cache = CredentialCache::default();
        let calls = Cell::new(0);
        let lookup = |_: Namespace, _: &IdentityId| {
            calls.set(calls.get() + 1);
            Some(Identity::named("root"))
        };

        let first = cache.resolve(Namespace::User, &IdentityId::Numeric(0), lookup).unwrap();
        let second = cache.resolve(Namespace::User, &IdentityId::Numeric(0), lookup).unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.name(first.unwrap()), "root");
    }

    #[test]
    fn namespaces_are_independent() {
        let mut cache = CredentialCache::default();
        let user = cache
            .resolve(Namespace::User, &IdentityId::Numeric(1000), |_, _| Some(Identity::named("alice")))
            .unwrap()
            .unwrap();
        let group = cache
            .resolve(Namespace::Group, &IdentityId::Numeric(1000), |_, _| Some(Identity::named("staff")))
            .unwrap()
            .unwrap();

        assert_eq!(cache.name(user), "alice");
        assert_eq!(cache.name(group), "staff");
        assert_eq!(cache.len(Namespace::User), 1);
        assert_eq!(cache.len(Namespace::Group), 1);
    }

    #[test]
    fn misses_are_not_cached() {
        let mut cache = CredentialCache::default();
        let calls = Cell::new(0);
        for _ in 0..3 {
            let resolved = cache
                .resolve(Namespace::User, &IdentityId::Numeric(4242), |_, _| {
                    calls.set(calls.get() + 1);
                    None
                })
                .unwrap();
            assert!(resolved.is_none());
        }
        assert_eq!(calls.get(), 3, "each miss queries the database again");
        assert!(cache.is_empty());
    }

    #[test]
    fn sid_keys_and_domains_are_stored() {
        let mut cache = CredentialCache::default();
        let sid = IdentityId::Sid("S-1-5-21-1-2-3-1001".to_string());
        let id = cache
            .resolve(Namespace::User, &sid, |_, _| Some(Identity::with_domain("Bob", "WORKGROUP")))
            .unwrap()
            .unwrap();

        assert_eq!(cache.name(id), "Bob");
        assert_eq!(cache.domain(id), Some("WORKGROUP"));

        let again = cache.resolve(Namespace::User, &sid, |_, _| None).unwrap();
        assert_eq!(again, Some(id));
    }

    #[test]
    fn full_table_is_reported() {
        let limits = CredentialLimits { records: 1, ..CredentialLimits::default() };
        let mut cache = CredentialCache::new(limits);
        cache.resolve(Namespace::Group, &IdentityId::Numeric(1), |_, _| Some(Identity::named("a"))).unwrap();

        let err = cache
            .resolve(Namespace::Group, &IdentityId::Numeric(2), |_, _| Some(Identity::named("b")))
            .unwrap_err();
        assert!(matches!(err, DomainError::ArenaCapacityExceeded { arena: "group credentials", .. }));
    }

    #[test]
    fn width_counts_terminal_cells() {
        let mut cache = CredentialCache::default();
        let id = cache
            .resolve(Namespace::User, &IdentityId::Numeric(7), |_, _| Some(Identity::named("jürgen")))
            .unwrap()
            .unwrap();
        assert_eq!(cache.name_width(id), 6);

        let wide = cache
            .resolve(Namespace::User, &IdentityId::Numeric(8), |_, _| Some(Identity::named("山田")))
            .unwrap()
            .unwrap();
        assert_eq!(cache.name_width(wide), 4);
    }

    #[test]
    fn windows_accounts_fill_names_not_sids() {
        let mut cache = CredentialCache::default();
        let accounts = (0..20).map(|rid| {
            let sid = format!("S-1-5-21-3623811015-3361044348-30300820-{}", 1000 + rid);
            (IdentityId::Sid(sid), format!("user{rid:02}"))
        });

        for (sid, name) in accounts {
            cache
                .resolve(Namespace::User, &sid, |_, _| Some(Identity::with_domain(name.clone(), "DESKTOP-4J2K9QL")))
                .unwrap();
        }

        assert_eq!(cache.len(Namespace::User), 20);
    }

    #[test]
    fn sid_overflow_names_its_arena() {
        let limits = CredentialLimits { sid_bytes: 8, ..CredentialLimits::default() };
        let mut cache = CredentialCache::new(limits);

        let err = cache
            .resolve(Namespace::User, &IdentityId::Sid("S-1-5-32-544".into()), |_, _| {
                Some(Identity::with_domain("Administrators", "BUILTIN"))
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::ArenaCapacityExceeded { arena: "user sids", .. }));
    }
}
