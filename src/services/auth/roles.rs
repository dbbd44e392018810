//! Principal roles.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Catalog and transactional writes.
    Admin,
    /// Reads and self-service operations.
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Customer => "CUSTOMER",
        }
    }

    /// Case-insensitive parse.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "CUSTOMER" => Some(Role::Customer),
            _ => None,
        }
    }

    /// Role read back from storage. Unknown values fall back to the least privileged role.
    pub fn from_stored(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(role = %s, "unknown stored role, treating as CUSTOMER");
            Role::Customer
        })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Customer"), Some(Role::Customer));
        assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
        assert_eq!(Role::parse("trader"), None);
    }

    #[test]
    fn unknown_stored_role_is_customer() {
        assert_eq!(Role::from_stored("ADMIN"), Role::Admin);
        assert_eq!(Role::from_stored(""), Role::Customer);
        assert_eq!(Role::from_stored("superuser"), Role::Customer);
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let parsed: Role = serde_json::from_str("\"CUSTOMER\"").unwrap();
        assert_eq!(parsed, Role::Customer);
        assert_eq!(Role::Customer.to_string(), "CUSTOMER");
    }
}
