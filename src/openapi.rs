//! OpenAPI document.
//!
//! Derived from the handler annotations with utoipa and served as JSON at
//! `/api-docs/openapi.json` (public route). New endpoints need a
//! `#[utoipa::path]` on the handler plus an entry in `paths(...)` below.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::v1::dto::{
    auth::{LoginRequest, TokenResponse},
    authors::{AuthorRequest, AuthorResponse},
    users::{SignupRequest, UserResponse},
};
use crate::error::{ErrorBody, ErrorResponse};
use crate::services::auth::Role;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GamesUP API",
        description = "Video-game marketplace backend: accounts, tokens and the authors catalog."
    ),
    modifiers(&BearerAuthAddon),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Token issuance"),
        (name = "users", description = "Accounts"),
        (name = "authors", description = "Authors catalog"),
    ),
    components(schemas(
        ErrorResponse,
        ErrorBody,
        LoginRequest,
        TokenResponse,
        SignupRequest,
        UserResponse,
        Role,
        AuthorRequest,
        AuthorResponse,
    )),
    paths(
        crate::api::v1::handlers::health::health,
        crate::api::v1::handlers::auth::login,
        crate::api::v1::handlers::users::signup,
        crate::api::v1::handlers::users::me,
        crate::api::v1::handlers::authors::list_authors,
        crate::api::v1::handlers::authors::get_author,
        crate::api::v1::handlers::authors::create_author,
        crate::api::v1::handlers::authors::update_author,
        crate::api::v1::handlers::authors::delete_author,
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by `security(...)` on handlers.
struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
