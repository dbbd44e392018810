use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repos::error::{RepoError, RepoResult};
use crate::services::authors::store::{Author, AuthorStore};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Author>,
}

/// Process-local author store for tests and database-less local runs.
#[derive(Debug, Default)]
pub struct MemoryAuthorStore {
    inner: RwLock<Inner>,
}

impl MemoryAuthorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorStore for MemoryAuthorStore {
    async fn list(&self) -> RepoResult<Vec<Author>> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Author>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, name: &str) -> RepoResult<Author> {
        let mut inner = self.inner.write().await;

        if inner.rows.iter().any(|a| a.name == name) {
            return Err(RepoError::Conflict);
        }

        // ids are never reused, like a BIGSERIAL column
        inner.next_id += 1;
        let author = Author {
            id: inner.next_id,
            name: name.to_string(),
        };
        inner.rows.push(author.clone());

        Ok(author)
    }

    async fn update(&self, id: i64, name: &str) -> RepoResult<Option<Author>> {
        let mut inner = self.inner.write().await;

        if inner.rows.iter().any(|a| a.name == name && a.id != id) {
            return Err(RepoError::Conflict);
        }

        let Some(author) = inner.rows.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        author.name = name.to_string();

        Ok(Some(author.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.rows.len();
        inner.rows.retain(|a| a.id != id);
        Ok(inner.rows.len() < before)
    }
}
