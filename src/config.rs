/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, CORS 許可、JWT 署名鍵など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - 読み込み元は lookup 関数として差し替え可能 (テストでは HashMap を渡す)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::services::auth::signing_key::DEVELOPMENT_SECRET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Upper bound for `JWT_EXPIRATION_SECONDS` (one year).
pub const MAX_JWT_EXPIRATION_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Credentials of the administrator account ensured at startup.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // None -> in-memory stores
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,

    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,

    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the signing secret or the database credentials
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("database", &self.database_url.is_some())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("request_timeout", &self.request_timeout)
            .field("request_body_limit_bytes", &self.request_body_limit_bytes)
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .field("bootstrap_admin", &self.bootstrap_admin)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match non_empty("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let database_url = non_empty("DATABASE_URL");

        let database_max_connections = non_empty("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(5);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_timeout = Duration::from_secs(
            non_empty("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(30),
        );

        let request_body_limit_bytes = non_empty("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let jwt_secret = match non_empty("JWT_SECRET") {
            Some(secret) => secret,
            None if app_env.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                tracing::warn!("JWT_SECRET is not set; using the built-in development secret");
                DEVELOPMENT_SECRET.to_string()
            }
        };

        let jwt_expiration_seconds = match non_empty("JWT_EXPIRATION_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ttl| (1..=MAX_JWT_EXPIRATION_SECONDS).contains(ttl))
                .ok_or(ConfigError::Invalid("JWT_EXPIRATION_SECONDS"))?,
            None => 86_400, // 24h
        };

        let bootstrap_admin = match (
            non_empty("BOOTSTRAP_ADMIN_EMAIL"),
            non_empty("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("BOOTSTRAP_ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("BOOTSTRAP_ADMIN_EMAIL")),
        };

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            cors_allowed_origins,
            request_timeout,
            request_body_limit_bytes,
            jwt_secret,
            jwt_expiration_seconds,
            bootstrap_admin,
        })
    }
}
