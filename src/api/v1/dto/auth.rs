/*
 * Responsibility
 * - login の request/response DTO
 */
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::auth::IssuedToken;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email (or display name) of the account.
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("email is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.access_token,
            token_type: issued.token_type.to_string(),
            expires_in: issued.expires_in,
        }
    }
}
