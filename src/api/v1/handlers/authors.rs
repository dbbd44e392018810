/*
 * Responsibility
 * - /authors 系 CRUD handler
 * - 参照は CUSTOMER/ADMIN, 更新系は ADMIN のみ (判定は認可ゲート側、handler は見ない)
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::dto::authors::{AuthorRequest, AuthorResponse},
    error::{AppError, ErrorResponse},
    repos::error::RepoError,
    state::AppState,
};

fn name_conflict(e: RepoError) -> AppError {
    match e {
        RepoError::Conflict => AppError::conflict("an author with this name already exists"),
        other => other.into(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All authors", body = [AuthorResponse]),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    let authors = state.authors.list().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, body = AuthorResponse),
        (status = 404, body = ErrorResponse),
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state
        .authors
        .get(id)
        .await?
        .ok_or(AppError::not_found("Author"))?;

    Ok(Json(author.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = AuthorRequest,
    responses(
        (status = 201, body = AuthorResponse),
        (status = 400, body = ErrorResponse),
        (status = 403, description = "ADMIN only", body = ErrorResponse),
        (status = 409, body = ErrorResponse),
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(req): Json<AuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), AppError> {
    let name = req
        .validated_name()
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;

    let author = state.authors.create(name).await.map_err(name_conflict)?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorRequest,
    responses(
        (status = 200, body = AuthorResponse),
        (status = 400, body = ErrorResponse),
        (status = 403, description = "ADMIN only", body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AuthorRequest>,
) -> Result<Json<AuthorResponse>, AppError> {
    let name = req
        .validated_name()
        .map_err(|msg| AppError::bad_request("VALIDATION_ERROR", msg))?;

    let author = state
        .authors
        .update(id, name)
        .await
        .map_err(name_conflict)?
        .ok_or(AppError::not_found("Author"))?;

    Ok(Json(author.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "ADMIN only", body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.authors.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Author"))
    }
}
