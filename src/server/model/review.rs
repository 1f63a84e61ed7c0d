//! Review domain models and parameters.
//!
//! Provides the review model, its comment-count projection used by the listing and
//! detail endpoints, the sortable column set, and parameter types for listing reviews
//! and updating votes.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::review::{ReviewDto, ReviewWithCommentCountDto, UpdateVotesDto},
    server::{
        error::review::ReviewError,
        util::parse::{parse_integer, parse_json_body, required_field},
    },
};

/// Board-game review. Only `votes` is mutable through the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    /// Slug of the category this review belongs to.
    pub category: String,
    pub designer: String,
    /// Username of the review author.
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    /// Net vote count; may be negative.
    pub votes: i32,
}

impl Review {
    /// Converts the review domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            review_id: self.review_id,
            title: self.title,
            category: self.category,
            designer: self.designer,
            owner: self.owner,
            review_body: self.review_body,
            review_img_url: self.review_img_url,
            created_at: self.created_at,
            votes: self.votes,
        }
    }

    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            review_id: entity.review_id,
            title: entity.title,
            category: entity.category,
            designer: entity.designer,
            owner: entity.owner,
            review_body: entity.review_body,
            review_img_url: entity.review_img_url,
            created_at: entity.created_at,
            votes: entity.votes,
        }
    }
}

/// Review together with the number of comments referencing it.
///
/// The count is aggregated per query and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithCommentCount {
    pub review: Review,
    pub comment_count: i64,
}

impl ReviewWithCommentCount {
    /// Converts to a flat DTO carrying every review field plus `comment_count`.
    pub fn into_dto(self) -> ReviewWithCommentCountDto {
        ReviewWithCommentCountDto {
            review: self.review.into_dto(),
            comment_count: self.comment_count,
        }
    }
}

/// Column a review listing can be ordered by. Ordering is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortColumn {
    ReviewId,
    Title,
    Category,
    Designer,
    Owner,
    ReviewBody,
    ReviewImgUrl,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ReviewSortColumn {
    /// Column name as accepted in the `sort_by` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReviewId => "review_id",
            Self::Title => "title",
            Self::Category => "category",
            Self::Designer => "designer",
            Self::Owner => "owner",
            Self::ReviewBody => "review_body",
            Self::ReviewImgUrl => "review_img_url",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::CommentCount => "comment_count",
        }
    }
}

impl FromStr for ReviewSortColumn {
    type Err = ReviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "review_id" => Ok(Self::ReviewId),
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            "designer" => Ok(Self::Designer),
            "owner" => Ok(Self::Owner),
            "review_body" => Ok(Self::ReviewBody),
            "review_img_url" => Ok(Self::ReviewImgUrl),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(ReviewError::InvalidInput),
        }
    }
}

/// Parameters for listing reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct GetReviewsParam {
    /// Only return reviews in this category slug.
    pub category: Option<String>,
    pub sort_by: ReviewSortColumn,
}

impl GetReviewsParam {
    /// Builds listing parameters from raw query values.
    ///
    /// # Arguments
    /// - `category` - Optional category slug filter
    /// - `sort_by` - Optional column name; defaults to `created_at`
    ///
    /// # Returns
    /// - `Ok(GetReviewsParam)` - Parameters ready for the service layer
    /// - `Err(ReviewError::InvalidInput)` - `sort_by` names an unknown column
    pub fn from_query(category: Option<String>, sort_by: Option<&str>) -> Result<Self, ReviewError> {
        let sort_by = match sort_by {
            Some(column) => column.parse()?,
            None => ReviewSortColumn::default(),
        };

        Ok(Self { category, sort_by })
    }
}

/// Parameters for atomically adjusting a review's vote count.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVotesParam {
    pub review_id: i32,
    /// Signed amount added to the current vote count.
    pub inc_votes: i32,
}

impl UpdateVotesParam {
    /// Builds vote update parameters from a raw JSON request body.
    ///
    /// # Arguments
    /// - `review_id` - Already-parsed review id from the path
    /// - `body` - Raw request body, expected to be `{"inc_votes": <integer>}`
    ///
    /// # Returns
    /// - `Ok(UpdateVotesParam)` - Body carries an integer `inc_votes`
    /// - `Err(ReviewError::NoInputDetected)` - Body is empty or has no `inc_votes`
    /// - `Err(ReviewError::InvalidInput)` - Body is not a JSON object or `inc_votes` is not an integer
    pub fn from_body(review_id: i32, body: &[u8]) -> Result<Self, ReviewError> {
        let dto: UpdateVotesDto = parse_json_body(body)?;
        let inc_votes = parse_integer(required_field(&dto.inc_votes)?)?;

        Ok(Self {
            review_id,
            inc_votes,
        })
    }
}
