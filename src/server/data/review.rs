//! Review data repository for database operations.
//!
//! This module provides the `ReviewRepository`, which builds the filtered, sorted review
//! listing with per-review comment counts, looks up single reviews, and applies vote
//! changes. Comment counts are aggregated with a `LEFT JOIN` on comments grouped by review,
//! so reviews without comments report zero.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    error::{review::ReviewError, AppError},
    model::review::{
        GetReviewsParam, Review, ReviewSortColumn, ReviewWithCommentCount, UpdateVotesParam,
    },
};

/// Alias of the aggregated comment count column.
const COMMENT_COUNT: &str = "comment_count";

/// Flat row produced by the comment-count query.
#[derive(Debug, FromQueryResult)]
struct ReviewCommentCountRow {
    review_id: i32,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_body: String,
    review_img_url: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i64,
}

impl ReviewCommentCountRow {
    fn into_domain(self) -> ReviewWithCommentCount {
        ReviewWithCommentCount {
            review: Review {
                review_id: self.review_id,
                title: self.title,
                category: self.category,
                designer: self.designer,
                owner: self.owner,
                review_body: self.review_body,
                review_img_url: self.review_img_url,
                created_at: self.created_at,
                votes: self.votes,
            },
            comment_count: self.comment_count,
        }
    }
}

/// `votes + inc_votes`, evaluated by the database.
fn votes_plus(inc_votes: i32) -> Expr {
    use sea_orm::sea_query::ExprTrait;

    Expr::col(entity::review::Column::Votes).add(inc_votes)
}

/// True when `votes + inc_votes` stays within the `i32` range of the column.
fn votes_plus_in_range(inc_votes: i32) -> Expr {
    use sea_orm::sea_query::ExprTrait;

    votes_plus(inc_votes).between(i32::MIN, i32::MAX)
}

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReviewRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Base select of every review column plus the number of comments on it.
    fn select_with_comment_count() -> Select<entity::review::Entity> {
        entity::prelude::Review::find()
            .column_as(entity::comment::Column::CommentId.count(), COMMENT_COUNT)
            .join(JoinType::LeftJoin, entity::review::Relation::Comment.def())
            .group_by(entity::review::Column::ReviewId)
    }

    /// Gets reviews with their comment counts, optionally filtered by category.
    ///
    /// Rows are ordered descending by the requested column. Ties are broken by
    /// `review_id` descending so the order is stable across requests.
    ///
    /// # Arguments
    /// - `param` - Optional category slug filter and sort column
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewWithCommentCount>)` - Matching reviews, empty if none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        param: &GetReviewsParam,
    ) -> Result<Vec<ReviewWithCommentCount>, DbErr> {
        let mut query = Self::select_with_comment_count();

        if let Some(category) = &param.category {
            query = query.filter(entity::review::Column::Category.eq(category.as_str()));
        }

        query = match param.sort_by {
            ReviewSortColumn::ReviewId => query.order_by_desc(entity::review::Column::ReviewId),
            ReviewSortColumn::Title => query.order_by_desc(entity::review::Column::Title),
            ReviewSortColumn::Category => query.order_by_desc(entity::review::Column::Category),
            ReviewSortColumn::Designer => query.order_by_desc(entity::review::Column::Designer),
            ReviewSortColumn::Owner => query.order_by_desc(entity::review::Column::Owner),
            ReviewSortColumn::ReviewBody => {
                query.order_by_desc(entity::review::Column::ReviewBody)
            }
            ReviewSortColumn::ReviewImgUrl => {
                query.order_by_desc(entity::review::Column::ReviewImgUrl)
            }
            ReviewSortColumn::CreatedAt => query.order_by_desc(entity::review::Column::CreatedAt),
            ReviewSortColumn::Votes => query.order_by_desc(entity::review::Column::Votes),
            ReviewSortColumn::CommentCount => {
                query.order_by_desc(Expr::col(Alias::new(COMMENT_COUNT)))
            }
        };

        if param.sort_by != ReviewSortColumn::ReviewId {
            query = query.order_by_desc(entity::review::Column::ReviewId);
        }

        let rows = query
            .into_model::<ReviewCommentCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(ReviewCommentCountRow::into_domain)
            .collect())
    }

    /// Gets a single review with its comment count.
    ///
    /// # Arguments
    /// - `review_id` - Primary key of the review
    ///
    /// # Returns
    /// - `Ok(Some(ReviewWithCommentCount))` - Review found
    /// - `Ok(None)` - No review with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, review_id: i32) -> Result<Option<ReviewWithCommentCount>, DbErr> {
        let row = Self::select_with_comment_count()
            .filter(entity::review::Column::ReviewId.eq(review_id))
            .into_model::<ReviewCommentCountRow>()
            .one(self.db)
            .await?;

        Ok(row.map(ReviewCommentCountRow::into_domain))
    }

    /// Checks whether a review with the given id exists.
    pub async fn exists(&self, review_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find_by_id(review_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether at least one review belongs to the given category.
    ///
    /// A category that exists in the categories table but has no reviews is
    /// treated as unused.
    ///
    /// # Arguments
    /// - `category` - Category slug
    ///
    /// # Returns
    /// - `Ok(true)` - One or more reviews use the category
    /// - `Ok(false)` - No review uses the category
    /// - `Err(DbErr)` - Database error during query
    pub async fn category_in_use(&self, category: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::Category.eq(category))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds `inc_votes` to a review's vote count and returns the updated review.
    ///
    /// The increment is a single `UPDATE ... SET votes = votes + ?` statement, so
    /// concurrent updates never lose a vote. Vote counts may go negative. The same
    /// statement only matches the row when the new count still fits in an `i32`, so an
    /// overflowing delta writes nothing.
    ///
    /// # Arguments
    /// - `param` - Review id and signed vote delta
    ///
    /// # Returns
    /// - `Ok(Review)` - Review updated
    /// - `Err(AppError::ReviewErr(NotFound))` - No review with that id
    /// - `Err(AppError::ReviewErr(InvalidInput))` - The new count would leave the `i32` range
    /// - `Err(AppError::DbErr)` - Database error during update or re-fetch
    pub async fn update_votes(&self, param: &UpdateVotesParam) -> Result<Review, AppError> {
        let result = entity::prelude::Review::update_many()
            .col_expr(entity::review::Column::Votes, votes_plus(param.inc_votes))
            .filter(entity::review::Column::ReviewId.eq(param.review_id))
            .filter(votes_plus_in_range(param.inc_votes))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            if self.exists(param.review_id).await? {
                tracing::debug!(
                    "Vote update on review {} out of range: {:+}",
                    param.review_id,
                    param.inc_votes
                );
                return Err(ReviewError::InvalidInput.into());
            }
            return Err(ReviewError::NotFound.into());
        }

        let entity = entity::prelude::Review::find_by_id(param.review_id)
            .one(self.db)
            .await?
            .ok_or(ReviewError::NotFound)?;

        Ok(Review::from_entity(entity))
    }
}
