/*
 * Responsibility
 * - v1 の URL 構造を定義 (/api/v1 に nest される)
 * - 誰が叩けるかはここでは決めない (api::policy の表と認可ゲートの責務)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::login,
    authors::{create_author, delete_author, get_author, list_authors, update_author},
    users::{me, signup},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/users/signup", post(signup))
        .route("/users/me", get(me))
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
}
