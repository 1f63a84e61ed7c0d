use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, category::CategoryDto},
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all review categories.
///
/// # Returns
/// - `200 OK` - Every category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let categories_dto: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}
