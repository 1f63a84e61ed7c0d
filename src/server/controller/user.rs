use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, user::UserDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// # Returns
/// - `200 OK` - Every user, unfiltered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}
