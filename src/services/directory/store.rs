use async_trait::async_trait;

use crate::repos::error::RepoResult;
use crate::services::auth::Role;

/// Stored principal. Lives for one request at most; never cached.
#[derive(Clone)]
pub struct Principal {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl std::fmt::Debug for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct NewPrincipal {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Lookup interface shared by the token issuer (credential check) and the
/// authorization gate (role check).
///
/// - `find_by_identifier` matches email first, then display name. `Ok(None)` = not found.
/// - `create` fails with `RepoError::Conflict` when the email or name is taken.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Principal>>;

    async fn create(&self, new: NewPrincipal) -> RepoResult<Principal>;
}
