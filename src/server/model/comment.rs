//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::{
        error::review::ReviewError,
        util::parse::{parse_json_body, parse_non_empty_string, required_field},
    },
};

/// User-authored reply attached to a review. Insert-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    /// Username of the comment author.
    pub author: String,
    pub review_id: i32,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts the comment domain model to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            author: self.author,
            review_id: self.review_id,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            author: entity.author,
            review_id: entity.review_id,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for posting a comment on a review.
///
/// `comment_id`, `votes` and `created_at` are assigned server-side on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParam {
    pub review_id: i32,
    /// Username of an existing user.
    pub author: String,
    pub body: String,
}

impl CreateCommentParam {
    /// Builds comment parameters from a raw JSON request body.
    ///
    /// Presence of both fields is checked before their types, so a payload missing
    /// either field is `NoInputDetected` regardless of the other.
    ///
    /// # Arguments
    /// - `review_id` - Already-parsed review id from the path
    /// - `body` - Raw request body, expected to be `{"username": "...", "body": "..."}`
    ///
    /// # Returns
    /// - `Ok(CreateCommentParam)` - Both fields are non-blank strings
    /// - `Err(ReviewError::NoInputDetected)` - `username` or `body` is absent
    /// - `Err(ReviewError::InvalidInput)` - A field is not a string or is blank
    pub fn from_body(review_id: i32, body: &[u8]) -> Result<Self, ReviewError> {
        let dto: CreateCommentDto = parse_json_body(body)?;
        let username = required_field(&dto.username)?;
        let comment_body = required_field(&dto.body)?;

        Ok(Self {
            review_id,
            author: parse_non_empty_string(username)?,
            body: parse_non_empty_string(comment_body)?,
        })
    }
}
