pub mod factory;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod roles;
pub mod signing_key;
pub mod token_issuer;

pub use factory::build_auth_service;
pub use jwt::{TokenCodec, TokenError, VerifiedToken};
pub use policy::{Access, RoutePolicy};
pub use roles::Role;
pub use token_issuer::{AuthService, IssuedToken};
