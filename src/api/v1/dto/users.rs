/*
 * Responsibility
 * - Users の request/response DTO
 * - validate() で形式チェック (存在/重複チェックは service/repo 側)
 */
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::auth::{Role, password};
use crate::services::directory::Principal;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err("name is required");
        }
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
            return Err("name must be between 2 and 100 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if !email.contains('@') {
            return Err("email must be a valid address");
        }

        password::validate_password_strength(&self.password)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Principal> for UserResponse {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            role: p.role,
        }
    }
}
