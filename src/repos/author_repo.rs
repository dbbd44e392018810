/*
 * Responsibility
 * - authors CRUD
 * - name は unique (重複は RepoError::Conflict)
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct AuthorRow {
    pub id: i64,
    pub name: String,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<AuthorRow>> {
    let rows = sqlx::query_as::<_, AuthorRow>(
        r#"
        SELECT id, name
        FROM authors
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, id: i64) -> RepoResult<Option<AuthorRow>> {
    let row = sqlx::query_as::<_, AuthorRow>(
        r#"
        SELECT id, name
        FROM authors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(db: &PgPool, name: &str) -> RepoResult<AuthorRow> {
    let row = sqlx::query_as::<_, AuthorRow>(
        r#"
        INSERT INTO authors (name)
        VALUES ($1)
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(db: &PgPool, id: i64, name: &str) -> RepoResult<Option<AuthorRow>> {
    let row = sqlx::query_as::<_, AuthorRow>(
        r#"
        UPDATE authors
        SET name = $2
        WHERE id = $1
        RETURNING id, name
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn delete(db: &PgPool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM authors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
