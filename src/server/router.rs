//! Axum route configuration and API documentation.

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{api, category, comment, review, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Board Game Reviews API"),
    tags(
        (name = "api", description = "Endpoint directory and health check"),
        (name = "category", description = "Review categories"),
        (name = "review", description = "Board game reviews and votes"),
        (name = "comment", description = "Comments on reviews"),
        (name = "user", description = "Registered users")
    )
)]
pub struct ApiDoc;

/// Builds the complete application router.
///
/// Every documented route is registered through `OpenApiRouter`, and the resulting
/// OpenAPI document is made available to the `GET /api/docs` handler as an extension.
/// Unmatched paths and methods answer `404 route not found`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(api::get_endpoints))
        .routes(routes!(api::get_health))
        .routes(routes!(category::get_categories))
        .routes(routes!(user::get_users))
        .routes(routes!(review::get_reviews))
        .routes(routes!(review::get_review, review::update_review_votes))
        .routes(routes!(
            comment::get_review_comments,
            comment::create_review_comment
        ))
        .split_for_parts();

    router
        .fallback(api::route_not_found)
        .method_not_allowed_fallback(api::route_not_found)
        .layer(Extension(Arc::new(api)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
