use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParam, service::comment::CommentService,
        state::AppState, util::parse::parse_review_id,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments on a review, newest first.
///
/// An existing review without comments answers `200 OK` with a message body
/// instead of an empty array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw path segment, parsed as an integer review ID
///
/// # Returns
/// - `200 OK` - Comments on the review, or `{"msg": "no comments found"}`
/// - `400 Bad Request` - Review ID is not an integer
/// - `404 Not Found` - Review does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Comments on the review, or a no comments found message", body = Vec<CommentDto>),
        (status = 400, description = "Invalid review ID", body = MessageDto),
        (status = 404, description = "Review not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Response, AppError> {
    let review_id = parse_review_id(&review_id)?;

    let comments = CommentService::new(&state.db)
        .get_comments(review_id)
        .await?;

    if comments.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(MessageDto {
                msg: "no comments found".to_string(),
            }),
        )
            .into_response());
    }

    let comments_dto: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments_dto)).into_response())
}

/// Post a comment on a review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw path segment, parsed as an integer review ID
/// - `body` - JSON object with non-empty string `username` and `body`
///
/// # Returns
/// - `201 Created` - The new comment as a single-element array
/// - `400 Bad Request` - Invalid review ID, missing or malformed fields, or unknown
///   user or review
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = Vec<CommentDto>),
        (status = 400, description = "Invalid input or no input detected", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_review_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let param = CreateCommentParam::from_body(review_id, &body)?;

    let comment = CommentService::new(&state.db)
        .create_comment(param)
        .await?;

    Ok((StatusCode::CREATED, Json(vec![comment.into_dto()])))
}
