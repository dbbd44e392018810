#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use gamesup_api::app::{assemble_state, build_router};
use gamesup_api::config::Config;
use gamesup_api::services::authors::MemoryAuthorStore;
use gamesup_api::services::directory::{MemoryUserDirectory, UserDirectory, ensure_admin};
use gamesup_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@gamesup.test";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub directory: Arc<MemoryUserDirectory>,
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "JWT_EXPIRATION_SECONDS" => Some("3600".to_string()),
        _ => None,
    })
    .unwrap()
}

/// Full router over in-memory stores, with one ADMIN account seeded.
pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let directory = Arc::new(MemoryUserDirectory::new());
    ensure_admin(directory.as_ref(), ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let state = assemble_state(
        &config,
        directory.clone() as Arc<dyn UserDirectory>,
        Arc::new(MemoryAuthorStore::new()),
    );
    let router = build_router(state.clone(), &config);

    TestApp {
        router,
        state,
        directory,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": email, "password": password}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn signup_customer(&self, name: &str, email: &str, password: &str) -> Value {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/api/v1/users/signup",
                None,
                json!({"name": name, "email": email, "password": password}),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
        body
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
