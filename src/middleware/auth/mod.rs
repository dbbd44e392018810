//! 認証 (request filter) と認可 (route policy gate) の middleware
mod access;
mod authorize;

use axum::{Router, middleware};

use crate::state::AppState;

/// Router 全体に認証 → 認可の順で middleware を掛ける。
///
/// axum は後から `.layer` したものが外側になるので、authorize を先に積む。
///
/// 例：
/// ```ignore
/// let router = Router::new().nest("/api/v1", api::v1::routes());
/// let router = middleware::auth::apply(router, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authorize::authorize_middleware,
        ))
        .layer(middleware::from_fn_with_state(state, access::access_middleware))
}
