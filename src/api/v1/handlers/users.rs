/*
 * Responsibility
 * - POST /users/signup (public): CUSTOMER を作る。ADMIN はここでは作れない
 * - GET /users/me: token の subject を directory で引き直して返す
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::users::{SignupRequest, UserResponse},
        extractors::AuthCtxExtractor,
    },
    error::{AppError, ErrorResponse},
    repos::error::RepoError,
    services::{
        auth::{Role, password},
        directory::NewPrincipal,
    },
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/users/signup",
    tag = "users",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 409, description = "Email or name already in use", body = ErrorResponse),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;

    let SignupRequest {
        name,
        email,
        password: secret,
    } = req;

    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&secret))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::Internal
        })?;

    let created = state
        .directory
        .create(NewPrincipal {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password_hash,
            role: Role::Customer,
        })
        .await
        .map_err(|e| match e {
            RepoError::Conflict => AppError::conflict("email or name already in use"),
            other => other.into(),
        })?;

    tracing::info!(principal_id = created.id, "account created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = UserResponse),
        (status = 401, description = "Missing, invalid or stale token", body = ErrorResponse),
    )
)]
pub async fn me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<UserResponse>, AppError> {
    let principal = state
        .directory
        .find_by_identifier(&ctx.subject)
        .await?
        .filter(|p| p.email == ctx.subject)
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(principal.into()))
}
