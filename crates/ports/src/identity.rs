// crates/ports/src/identity.rs
use dirlist_shared_kernel::{Identity, IdentityId, Namespace};

/// Port for the system identity database (passwd/group, or Windows
/// account lookup).
pub trait IdentitySource {
    /// Resolves an id to a name. `None` when the id is unknown.
    fn lookup(&self, namespace: Namespace, id: &IdentityId) -> Option<Identity>;
}
