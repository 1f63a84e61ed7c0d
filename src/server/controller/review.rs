use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::MessageDto,
        review::{ReviewDto, ReviewWithCommentCountDto, UpdateVotesDto},
    },
    server::{
        error::{review::ReviewError, AppError},
        model::review::{GetReviewsParam, UpdateVotesParam},
        service::review::ReviewService,
        state::AppState,
        util::parse::parse_review_id,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
pub struct ReviewQueryParams {
    pub category: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
}

/// Get reviews, optionally filtered by category and sorted by a column.
///
/// Reviews are always sorted descending. Each review carries the number of comments
/// posted on it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `category` slug and `sort_by` column (alias `sortBy`)
///
/// # Returns
/// - `200 OK` - Matching reviews with comment counts
/// - `400 Bad Request` - Unknown sort column or malformed query string
/// - `404 Not Found` - No review uses the requested category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    params(
        ("category" = Option<String>, Query, description = "Only return reviews in this category"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by, descending (default: created_at)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewWithCommentCountDto>),
        (status = 400, description = "Unknown sort column or malformed query string", body = MessageDto),
        (status = 404, description = "No matching results", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    query: Result<Query<ReviewQueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query.map_err(|_| ReviewError::InvalidInput)?;
    let param = GetReviewsParam::from_query(params.category, params.sort_by.as_deref())?;

    let reviews = ReviewService::new(&state.db).get_reviews(param).await?;

    let reviews_dto: Vec<ReviewWithCommentCountDto> =
        reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}

/// Get a single review with its comment count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw path segment, parsed as an integer review ID
///
/// # Returns
/// - `200 OK` - Review with comment count
/// - `400 Bad Request` - Review ID is not an integer
/// - `404 Not Found` - Review does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewWithCommentCountDto),
        (status = 400, description = "Invalid review ID", body = MessageDto),
        (status = 404, description = "Review not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;

    let review = ReviewService::new(&state.db).get_review(review_id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

/// Add to a review's vote count.
///
/// The body is read raw so that an empty body reports `no input detected` rather than
/// a JSON extraction error. The updated review is returned as a single-element array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Raw path segment, parsed as an integer review ID
/// - `body` - JSON object with an integer `inc_votes`
///
/// # Returns
/// - `200 OK` - Updated review
/// - `400 Bad Request` - Invalid review ID, non-integer or overflowing `inc_votes`, or missing `inc_votes`
/// - `404 Not Found` - Review does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    request_body = UpdateVotesDto,
    responses(
        (status = 200, description = "Successfully updated votes", body = Vec<ReviewDto>),
        (status = 400, description = "Invalid input or no input detected", body = MessageDto),
        (status = 404, description = "Review not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_review_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_review_id(&review_id)?;
    let param = UpdateVotesParam::from_body(review_id, &body)?;

    let review = ReviewService::new(&state.db).update_votes(param).await?;

    Ok((StatusCode::OK, Json(vec![review.into_dto()])))
}
