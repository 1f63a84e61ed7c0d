use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub author: String,
    pub review_id: i32,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/reviews/{review_id}/comments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    /// Username of an existing user, stored as the comment author.
    #[schema(value_type = String, required = true)]
    pub username: Option<Value>,
    #[schema(value_type = String, required = true)]
    pub body: Option<Value>,
}
