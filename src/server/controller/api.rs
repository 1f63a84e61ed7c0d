//! Service-level endpoints: the OpenAPI endpoint directory, health check and the
//! fallback for unmatched routes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::{
    model::api::{HealthDto, MessageDto},
    server::{error::{review::ReviewError, AppError}, state::AppState},
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

/// Describe every endpoint of the API.
///
/// Serves the OpenAPI document generated from the handler annotations. `/api` itself
/// has no handler and falls through to `route not found`.
#[utoipa::path(
    get,
    path = "/api/docs",
    tag = API_TAG,
    responses(
        (status = 200, description = "OpenAPI document describing every endpoint")
    ),
)]
pub async fn get_endpoints(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    (StatusCode::OK, Json(api.as_ref().clone()))
}

/// Check that the server can reach its database.
///
/// # Returns
/// - `200 OK` - `{"status": "ok"}`
/// - `500 Internal Server Error` - Database ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = API_TAG,
    responses(
        (status = 200, description = "Server and database are reachable", body = HealthDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}

/// Fallback for any method and path without a handler.
pub async fn route_not_found() -> ReviewError {
    ReviewError::RouteNotFound
}
