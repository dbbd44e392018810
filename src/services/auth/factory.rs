/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AuthService, TokenCodec, signing_key::SigningKey};
use crate::services::directory::UserDirectory;

pub fn build_auth_service(config: &Config, directory: Arc<dyn UserDirectory>) -> Arc<AuthService> {
    let key = SigningKey::derive(&config.jwt_secret);
    let codec = TokenCodec::new(&key, config.jwt_expiration_seconds);

    Arc::new(AuthService::new(codec, directory))
}
