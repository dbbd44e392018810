/*
 * Responsibility
 * - route ごとの access 要件 (認可ゲートが参照する表)
 * - 上から順に評価し最初に一致した rule を使う。どれにも一致しなければ認証必須
 * - route を足したらここにも足す (足し忘れても fallback で認証必須になる)
 */
use axum::http::Method;

use crate::services::auth::{Access, Role, RoutePolicy};

pub fn route_policy() -> RoutePolicy {
    let readers = Access::any_of(&[Role::Admin, Role::Customer]);
    let admin = Access::any_of(&[Role::Admin]);

    RoutePolicy::new(Access::Authenticated)
        .any("/health", Access::Public)
        .any("/api-docs/*", Access::Public)
        .any("/api/v1/auth/*", Access::Public)
        .on(Method::POST, "/api/v1/users/signup", Access::Public)
        .on(Method::GET, "/api/v1/users/me", Access::Authenticated)
        .on(Method::GET, "/api/v1/authors/*", readers)
        .on(Method::POST, "/api/v1/authors", admin.clone())
        .on(Method::PUT, "/api/v1/authors/{id}", admin.clone())
        .on(Method::DELETE, "/api/v1/authors/{id}", admin)
}
