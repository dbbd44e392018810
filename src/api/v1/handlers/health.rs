/*
 * Responsibility
 * - GET /health (疎通用, 認証なし)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
