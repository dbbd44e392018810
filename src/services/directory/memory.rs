use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repos::error::{RepoError, RepoResult};
use crate::services::directory::store::{NewPrincipal, Principal, UserDirectory};

/// Process-local directory for tests and database-less local runs.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    rows: RwLock<Vec<Principal>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Principal>> {
        let rows = self.rows.read().await;

        let found = rows
            .iter()
            .find(|p| p.email == identifier)
            .or_else(|| rows.iter().find(|p| p.name == identifier))
            .cloned();

        Ok(found)
    }

    async fn create(&self, new: NewPrincipal) -> RepoResult<Principal> {
        let mut rows = self.rows.write().await;

        if rows
            .iter()
            .any(|p| p.email == new.email || p.name == new.name)
        {
            return Err(RepoError::Conflict);
        }

        let principal = Principal {
            id: rows.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
        };
        rows.push(principal.clone());

        Ok(principal)
    }
}
