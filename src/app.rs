/*
 * Responsibility
 * - Config読み込み → 依存生成 (directory / authors store / AuthService) → Router 組み立て
 * - Middleware の適用順: auth(認証→認可) → security headers → CORS → HTTP 共通
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, policy::route_policy};
use crate::config::Config;
use crate::middleware;
use crate::openapi::{self, OPENAPI_JSON_PATH};
use crate::services::auth::{build_auth_service, password};
use crate::services::authors::{AuthorStore, MemoryAuthorStore, PgAuthorStore};
use crate::services::directory::{
    MemoryUserDirectory, PgUserDirectory, UserDirectory, ensure_admin,
};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,gamesup_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched
        tracing::error!(?info, "panic");

        // development: crash the whole process so we notice immediately
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Pick the storage backend, then wire the services on top of it.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (directory, authors): (Arc<dyn UserDirectory>, Arc<dyn AuthorStore>) =
        match &config.database_url {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(url)
                    .await
                    .context("failed to connect to the database")?;

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("failed to run migrations")?;

                (
                    Arc::new(PgUserDirectory::new(pool.clone())),
                    Arc::new(PgAuthorStore::new(pool)),
                )
            }
            None => {
                tracing::warn!("DATABASE_URL not set; using in-memory stores (data is lost on exit)");
                (
                    Arc::new(MemoryUserDirectory::new()),
                    Arc::new(MemoryAuthorStore::new()),
                )
            }
        };

    // decoy hash for unknown-account logins, built before the first request
    tokio::task::spawn_blocking(password::decoy_hash)
        .await
        .context("failed to prepare the decoy password hash")?;

    if let Some(admin) = &config.bootstrap_admin {
        ensure_admin(directory.as_ref(), &admin.email, &admin.password).await?;
    }

    Ok(assemble_state(config, directory, authors))
}

/// Build `AppState` over already constructed stores.
pub fn assemble_state(
    config: &Config,
    directory: Arc<dyn UserDirectory>,
    authors: Arc<dyn AuthorStore>,
) -> AppState {
    let auth = build_auth_service(config, directory.clone());
    AppState::new(auth, directory, authors, route_policy())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(api::v1::handlers::health::health))
        .route(OPENAPI_JSON_PATH, get(openapi::openapi_json))
        .nest("/api/v1", api::v1::routes());

    let router = middleware::auth::apply(router, state.clone()).with_state(state);
    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);

    middleware::http::apply(router, config)
}
