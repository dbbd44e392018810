use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{error::RepoResult, user_repo};
use crate::services::auth::Role;
use crate::services::directory::store::{NewPrincipal, Principal, UserDirectory};

/// `users` table backed directory.
#[derive(Clone, Debug)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<user_repo::UserRow> for Principal {
    fn from(row: user_repo::UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: Role::from_stored(&row.role),
        }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Principal>> {
        let row = user_repo::find_by_identifier(&self.pool, identifier).await?;
        Ok(row.map(Principal::from))
    }

    async fn create(&self, new: NewPrincipal) -> RepoResult<Principal> {
        let row = user_repo::create(
            &self.pool,
            &new.name,
            &new.email,
            &new.password_hash,
            new.role.as_str(),
        )
        .await?;

        Ok(row.into())
    }
}
