/*
 * Responsibility
 * - POST /auth/login (public)
 * - 資格情報の検証と token 発行は AuthService に委譲
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::auth::{LoginRequest, TokenResponse},
    error::{AppError, ErrorResponse},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Blank email or password", body = ErrorResponse),
        (status = 401, description = "Bad credentials", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;

    let issued = state.auth.login(req.email.trim(), &req.password).await?;

    Ok(Json(issued.into()))
}
