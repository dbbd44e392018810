/*
 * Responsibility
 * - Authors の request/response DTO
 */
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::authors::Author;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorRequest {
    #[schema(example = "Hideo Kojima")]
    pub name: String,
}

impl AuthorRequest {
    /// Trimmed name, or the reason it is unacceptable.
    pub fn validated_name(&self) -> Result<&str, &'static str> {
        let name = self.name.trim();
        let len = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            return Err("name must be between 2 and 100 characters");
        }
        Ok(name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
