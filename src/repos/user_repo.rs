/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り lookup / insert を提供
 * - DB エラーは RepoError に変換して返す (unique 違反は Conflict)
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

// email 一致を name 一致より優先する
pub async fn find_by_identifier(db: &PgPool, identifier: &str) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email, password_hash, role
        FROM users
        WHERE email = $1 OR name = $1
        ORDER BY (email = $1) DESC
        LIMIT 1
        "#,
    )
    .bind(identifier)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
) -> RepoResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, password_hash, role
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
