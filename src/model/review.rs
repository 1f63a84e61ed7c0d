use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Review with the number of comments posted on it.
///
/// Serialized flat: every review field plus `comment_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewWithCommentCountDto {
    #[serde(flatten)]
    pub review: ReviewDto,
    pub comment_count: i64,
}

/// Request body for `PATCH /api/reviews/{review_id}`.
///
/// Fields stay raw JSON so that a wrong type is reported as invalid input rather than
/// as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateVotesDto {
    /// Signed amount added to the review's current vote count.
    #[schema(value_type = i32, required = true)]
    pub inc_votes: Option<Value>,
}
