// crates/infra/src/identity.rs
use dirlist_ports::identity::IdentitySource;
use dirlist_shared_kernel::{Identity, IdentityId, Namespace};

/// Identity adapter backed by the operating system's account database:
/// passwd/group on Unix, `LookupAccountSidW` on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentitySource;

impl SystemIdentitySource {
    pub fn new() -> Self {
        Self
    }
}

impl IdentitySource for SystemIdentitySource {
    #[cfg(unix)]
    fn lookup(&self, namespace: Namespace, id: &IdentityId) -> Option<Identity> {
        use users::{get_group_by_gid, get_user_by_uid};

        let IdentityId::Numeric(id) = *id else {
            return None;
        };
        let name = match namespace {
            Namespace::User => get_user_by_uid(id)?.name().to_string_lossy().into_owned(),
            Namespace::Group => get_group_by_gid(id)?.name().to_string_lossy().into_owned(),
        };
        Some(Identity::named(name))
    }

    #[cfg(windows)]
    fn lookup(&self, _namespace: Namespace, id: &IdentityId) -> Option<Identity> {
        let IdentityId::Sid(sid) = id else {
            return None;
        };
        let (name, domain) = crate::win32::lookup_account(sid)?;
        Some(Identity::with_domain(name, domain))
    }

    #[cfg(not(any(unix, windows)))]
    fn lookup(&self, _namespace: Namespace, _id: &IdentityId) -> Option<Identity> {
        None
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn root_is_known() {
        let source = SystemIdentitySource::new();
        let root = source.lookup(Namespace::User, &IdentityId::Numeric(0)).expect("uid 0 exists");
        assert_eq!(root.name, "root");
        assert_eq!(root.domain, None);
    }

    #[test]
    fn sids_are_not_unix_ids() {
        let source = SystemIdentitySource::new();
        assert!(source.lookup(Namespace::User, &IdentityId::Sid("S-1-5-18".into())).is_none());
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        let source = SystemIdentitySource::new();
        assert!(source.lookup(Namespace::Group, &IdentityId::Numeric(u32::MAX - 7)).is_none());
    }
}
