//! Bearer token 検証 → AuthCtx を extensions に入れる (request filter)
//!
//! - `Authorization` が無い / `Bearer ` 以外の scheme: 何もせず匿名のまま次へ
//! - `Bearer <token>` が検証に失敗 (署名不一致, 期限切れ, 壊れた token): その場で 401
//!   public route でも匿名扱いには落とさない
//! - 成功: `AuthCtx { subject, jti, role: None }` を格納
//!
//! role の判定はここではしない (authorize 側の責務)

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// `Authorization` から bearer token を取り出す。対象外なら None。
fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(|token| token.trim().to_string())
}

pub(super) async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(&req) else {
        return Ok(next.run(req).await);
    };

    let verified = match state.auth.verify(&token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "access token rejected"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(jti = ?verified.jti, "access token accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::from(verified));

    Ok(next.run(req).await)
}
