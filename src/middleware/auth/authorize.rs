//! 認可ゲート: RoutePolicy を引いて route ごとの access 要件を強制する
//!
//! access middleware の後に走る前提 (AuthCtx があれば検証済み)。
//!
//! - Public: そのまま通す
//! - Authenticated: AuthCtx が無ければ 401
//! - Roles: directory から principal を毎回引き直す (cache しない)
//!   - 見つからない: 401 / lookup 失敗: 500 / role が集合外: 403
//!   - 通過時は AuthCtx に role を載せ直す

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::Access;
use crate::state::AppState;

// nest されていても元の path で判定する
fn request_path(req: &Request<Body>) -> String {
    req.extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

pub(super) async fn authorize_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request_path(&req);
    let access = state.policy.resolve(req.method(), &path);

    let allowed = match access {
        Access::Public => return Ok(next.run(req).await),
        Access::Authenticated => {
            if req.extensions().get::<AuthCtx>().is_none() {
                tracing::info!(method = %req.method(), path = %path, "authentication required");
                return Err(AppError::Unauthorized);
            }
            return Ok(next.run(req).await);
        }
        Access::Roles(roles) => roles,
    };

    let Some(ctx) = req.extensions().get::<AuthCtx>().cloned() else {
        tracing::info!(method = %req.method(), path = %path, "authentication required");
        return Err(AppError::Unauthorized);
    };

    let principal = state
        .directory
        .find_by_identifier(&ctx.subject)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "directory lookup failed");
            AppError::Internal
        })?;

    // subject は email。name だけが一致した別人は通さない
    let Some(principal) = principal.filter(|p| p.email == ctx.subject) else {
        tracing::warn!(jti = ?ctx.jti, "token subject no longer exists");
        return Err(AppError::Unauthorized);
    };

    if !allowed.contains(&principal.role) {
        tracing::warn!(
            principal_id = principal.id,
            role = %principal.role,
            method = %req.method(),
            path = %path,
            "access denied"
        );
        return Err(AppError::Forbidden);
    }

    req.extensions_mut().insert(ctx.with_role(principal.role));

    Ok(next.run(req).await)
}
