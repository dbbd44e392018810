/*
 * Responsibility
 * - UserDirectory (principal lookup) の trait と実装 (Postgres / in-memory)
 * - 起動時の管理者アカウント確保 (signup は CUSTOMER しか作れないため)
 */
pub mod memory;
pub mod postgres;
mod store;

pub use memory::MemoryUserDirectory;
pub use postgres::PgUserDirectory;
pub use store::{NewPrincipal, Principal, UserDirectory};

use crate::error::AppError;
use crate::repos::error::RepoError;
use crate::services::auth::{Role, password};

/// Make sure an ADMIN principal with `email` exists.
///
/// An existing account with that email is left untouched, whatever its role.
pub async fn ensure_admin(
    directory: &dyn UserDirectory,
    email: &str,
    secret: &str,
) -> Result<(), AppError> {
    if let Some(existing) = directory.find_by_identifier(email).await?
        && existing.email == email
    {
        if existing.role != Role::Admin {
            tracing::warn!(email = %email, role = %existing.role, "bootstrap admin email belongs to a non-admin account");
        }
        return Ok(());
    }

    let secret = secret.to_string();
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&secret))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "failed to hash bootstrap admin password");
            AppError::Internal
        })?;

    let created = directory
        .create(NewPrincipal {
            name: email.to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::Admin,
        })
        .await;

    match created {
        Ok(principal) => {
            tracing::info!(principal_id = principal.id, "bootstrap admin created");
            Ok(())
        }
        // name taken by someone else
        Err(RepoError::Conflict) => {
            tracing::warn!(email = %email, "bootstrap admin could not be created: name already in use");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
