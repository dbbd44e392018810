//! Signup, `/users/me` and the authors catalog.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;
use gamesup_api::services::directory::UserDirectory;

#[tokio::test]
async fn signup_creates_customer_and_me_returns_it() {
    let app = spawn_app().await;

    let created = app
        .signup_customer("dave", "dave@example.com", "dave-password")
        .await;
    assert_eq!(created["role"], "CUSTOMER");
    assert_eq!(created["email"], "dave@example.com");
    assert!(created.get("password_hash").is_none());

    let token = app.login("dave@example.com", "dave-password").await;
    let (status, me) = app
        .send(get("/api/v1/users/me", Some(&bearer(&token))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], created["id"]);
    assert_eq!(me["name"], "dave");
}

#[tokio::test]
async fn login_by_display_name_works() {
    let app = spawn_app().await;
    app.signup_customer("erin", "erin@example.com", "erin-password")
        .await;

    let token = app.login("erin", "erin-password").await;
    let verified = app.state.auth.verify(&token).unwrap();
    assert_eq!(verified.subject, "erin@example.com");
}

#[tokio::test]
async fn duplicate_signup_is_409() {
    let app = spawn_app().await;
    app.signup_customer("frank", "frank@example.com", "frank-password")
        .await;

    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/v1/users/signup",
            None,
            json!({"name": "frank2", "email": "frank@example.com", "password": "frank-password"}),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn invalid_signup_is_400() {
    let app = spawn_app().await;

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/v1/users/signup",
            None,
            json!({"name": "gina", "email": "gina@example.com", "password": "   "}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/v1/users/signup",
            None,
            json!({"name": "gina", "email": "not-an-email", "password": "gina-password"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_never_creates_admins() {
    let app = spawn_app().await;

    // unknown fields are ignored; the role is always CUSTOMER
    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/v1/users/signup",
            None,
            json!({"name": "mallory", "email": "mallory@example.com", "password": "mallory-password", "role": "ADMIN"}),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "CUSTOMER");
}

#[tokio::test]
async fn authors_crud_as_admin() {
    let app = spawn_app().await;
    let admin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let (status, created) = app
        .send(json_request(
            "POST",
            "/api/v1/authors",
            Some(&admin),
            json!({"name": "  Shigeru Miyamoto  "}),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Shigeru Miyamoto");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = app
        .send(get(&format!("/api/v1/authors/{id}"), Some(&bearer(&admin))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Shigeru Miyamoto");

    let (status, updated) = app
        .send(json_request(
            "PUT",
            &format!("/api/v1/authors/{id}"),
            Some(&admin),
            json!({"name": "S. Miyamoto"}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "S. Miyamoto");

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/v1/authors",
            Some(&admin),
            json!({"name": "S. Miyamoto"}),
        ))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/v1/authors",
            Some(&admin),
            json!({"name": "X"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send(json_request(
            "DELETE",
            &format!("/api/v1/authors/{id}"),
            Some(&admin),
            json!({}),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app
        .send(get(&format!("/api/v1/authors/{id}"), Some(&bearer(&admin))))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Author not found.");
}

#[tokio::test]
async fn deleted_account_token_stops_working_on_gated_routes() {
    let app = spawn_app().await;
    app.signup_customer("henry", "henry@example.com", "henry-password")
        .await;
    let token = app.login("henry@example.com", "henry-password").await;

    let (status, _) = app
        .send(get("/api/v1/authors", Some(&bearer(&token))))
        .await;
    assert_eq!(status, StatusCode::OK);

    // a fresh app shares nothing with the first one: same key, empty directory
    let other = spawn_app().await;
    assert!(
        other
            .directory
            .find_by_identifier("henry@example.com")
            .await
            .unwrap()
            .is_none()
    );
    let (status, _) = other
        .send(get("/api/v1/authors", Some(&bearer(&token))))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
