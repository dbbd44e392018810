use async_trait::async_trait;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Author persistence.
///
/// - `get` / `update` return `Ok(None)` for an unknown id.
/// - `create` / `update` fail with `RepoError::Conflict` on a duplicate name.
/// - `delete` returns whether a row was removed.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn list(&self) -> RepoResult<Vec<Author>>;

    async fn get(&self, id: i64) -> RepoResult<Option<Author>>;

    async fn create(&self, name: &str) -> RepoResult<Author>;

    async fn update(&self, id: i64, name: &str) -> RepoResult<Option<Author>>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
