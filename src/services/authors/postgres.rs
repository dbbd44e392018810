use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{author_repo, error::RepoResult};
use crate::services::authors::store::{Author, AuthorStore};

#[derive(Clone, Debug)]
pub struct PgAuthorStore {
    pool: PgPool,
}

impl PgAuthorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<author_repo::AuthorRow> for Author {
    fn from(row: author_repo::AuthorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl AuthorStore for PgAuthorStore {
    async fn list(&self) -> RepoResult<Vec<Author>> {
        let rows = author_repo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Author>> {
        Ok(author_repo::get(&self.pool, id).await?.map(Author::from))
    }

    async fn create(&self, name: &str) -> RepoResult<Author> {
        Ok(author_repo::create(&self.pool, name).await?.into())
    }

    async fn update(&self, id: i64, name: &str) -> RepoResult<Option<Author>> {
        Ok(author_repo::update(&self.pool, id, name)
            .await?
            .map(Author::from))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        author_repo::delete(&self.pool, id).await
    }
}
