use std::sync::Arc;

use crate::error::AppError;
use crate::services::auth::jwt::{TokenCodec, TokenError, VerifiedToken};
use crate::services::auth::password::{self, PasswordError};
use crate::services::directory::UserDirectory;

/// Token handed back by a successful login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

#[derive(Clone)]
pub struct AuthService {
    codec: TokenCodec,
    directory: Arc<dyn UserDirectory>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(codec: TokenCodec, directory: Arc<dyn UserDirectory>) -> Self {
        Self { codec, directory }
    }

    /// Check `identifier` + `secret` against the directory and issue a token.
    ///
    /// - Unknown identifier and wrong secret both end in `AppError::Unauthorized`,
    ///   after one argon2 verification each.
    /// - The token subject is the principal's email, whatever identifier was used.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<IssuedToken, AppError> {
        let principal = self.directory.find_by_identifier(identifier).await?;

        // argon2 は CPU を食うので blocking pool へ
        // principal が居なくても decoy hash で同じだけ検証する (応答時間でアカウントの有無を漏らさない)
        let secret = secret.to_string();
        let stored_hash = principal
            .as_ref()
            .map(|p| p.password_hash.clone())
            .unwrap_or_else(|| password::decoy_hash().to_string());
        let checked =
            tokio::task::spawn_blocking(move || password::verify_password(&secret, &stored_hash))
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "password verification task failed");
                    AppError::Internal
                })?;

        let Some(principal) = principal else {
            tracing::warn!(reason = "unknown_identifier", "login rejected");
            return Err(AppError::Unauthorized);
        };

        match checked {
            Ok(()) => {}
            Err(PasswordError::Mismatch) => {
                tracing::warn!(principal_id = principal.id, reason = "bad_credentials", "login rejected");
                return Err(AppError::Unauthorized);
            }
            Err(e) => {
                tracing::error!(principal_id = principal.id, error = %e, "stored credential unusable");
                return Err(AppError::Unauthorized);
            }
        }

        let access_token = self.codec.issue(&principal.email).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AppError::Internal
        })?;

        tracing::info!(principal_id = principal.id, role = %principal.role, "login succeeded");

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer",
            expires_in: self.codec.ttl_seconds(),
        })
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        self.codec.verify(token)
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{Role, signing_key::SigningKey};
    use crate::services::directory::{MemoryUserDirectory, NewPrincipal};

    async fn service_with_alice() -> AuthService {
        let directory = MemoryUserDirectory::new();
        directory
            .create(NewPrincipal {
                name: "alice".into(),
                email: "alice@example.com".into(),
                password_hash: password::hash_password("wonderland").unwrap(),
                role: Role::Customer,
            })
            .await
            .unwrap();

        let codec = TokenCodec::new(&SigningKey::derive("unit-test-secret"), 3600);
        AuthService::new(codec, Arc::new(directory))
    }

    #[tokio::test]
    async fn login_issues_token_for_email() {
        let auth = service_with_alice().await;

        let issued = auth.login("alice@example.com", "wonderland").await.unwrap();
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);

        let verified = auth.verify(&issued.access_token).unwrap();
        assert_eq!(verified.subject, "alice@example.com");
    }

    #[tokio::test]
    async fn login_by_name_still_uses_email_subject() {
        let auth = service_with_alice().await;

        let issued = auth.login("alice", "wonderland").await.unwrap();
        let verified = auth.verify(&issued.access_token).unwrap();
        assert_eq!(verified.subject, "alice@example.com");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_alike() {
        let auth = service_with_alice().await;

        let wrong = auth.login("alice@example.com", "looking-glass").await;
        let unknown = auth.login("bob@example.com", "wonderland").await;

        assert!(matches!(wrong, Err(AppError::Unauthorized)));
        assert!(matches!(unknown, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn unknown_user_costs_a_password_verification_too() {
        use std::time::{Duration, Instant};

        let auth = service_with_alice().await;
        let _ = password::decoy_hash();

        async fn fastest(auth: &AuthService, identifier: &str) -> Duration {
            let mut best = Duration::MAX;
            for _ in 0..3 {
                let started = Instant::now();
                let res = auth.login(identifier, "looking-glass").await;
                assert!(matches!(res, Err(AppError::Unauthorized)));
                best = best.min(started.elapsed());
            }
            best
        }

        let wrong_password = fastest(&auth, "alice@example.com").await;
        let unknown_user = fastest(&auth, "bob@example.com").await;

        // both paths are dominated by one argon2 run
        assert!(
            unknown_user * 4 >= wrong_password,
            "unknown={unknown_user:?} wrong={wrong_password:?}"
        );
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_rejected() {
        let directory = MemoryUserDirectory::new();
        directory
            .create(NewPrincipal {
                name: "legacy".into(),
                email: "legacy@example.com".into(),
                password_hash: "plaintext".into(),
                role: Role::Customer,
            })
            .await
            .unwrap();
        let codec = TokenCodec::new(&SigningKey::derive("unit-test-secret"), 60);
        let auth = AuthService::new(codec, Arc::new(directory));

        let res = auth.login("legacy@example.com", "plaintext").await;
        assert!(matches!(res, Err(AppError::Unauthorized)));
    }
}
