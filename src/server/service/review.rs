//! Review service for business logic.
//!
//! This module provides the `ReviewService`, which classifies missing reviews and unused
//! category filters before results reach the controller layer.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::{review::ReviewError, AppError},
    model::review::{GetReviewsParam, Review, ReviewWithCommentCount, UpdateVotesParam},
};

/// Service providing business logic for review queries and vote updates.
pub struct ReviewService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new ReviewService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReviewService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a single review with its comment count.
    ///
    /// # Arguments
    /// - `review_id` - Primary key of the review
    ///
    /// # Returns
    /// - `Ok(ReviewWithCommentCount)` - Review found
    /// - `Err(AppError::ReviewErr(NotFound))` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_review(&self, review_id: i32) -> Result<ReviewWithCommentCount, AppError> {
        let review = ReviewRepository::new(self.db)
            .get_by_id(review_id)
            .await?
            .ok_or(ReviewError::NotFound)?;

        Ok(review)
    }

    /// Retrieves reviews with comment counts, optionally filtered by category.
    ///
    /// A category filter only matches when at least one review uses the category;
    /// otherwise the request is rejected before the listing query runs.
    ///
    /// # Arguments
    /// - `param` - Optional category filter and sort column
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewWithCommentCount>)` - Matching reviews in sort order
    /// - `Err(AppError::ReviewErr(NoMatchingResults))` - No review uses the category
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_reviews(
        &self,
        param: GetReviewsParam,
    ) -> Result<Vec<ReviewWithCommentCount>, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        if let Some(category) = &param.category {
            if !review_repo.category_in_use(category).await? {
                tracing::debug!("No reviews in category {:?}", category);
                return Err(ReviewError::NoMatchingResults.into());
            }
        }

        tracing::debug!(
            "Listing reviews in {:?} sorted by {}",
            param.category,
            param.sort_by.as_str()
        );

        let reviews = review_repo.get_all(&param).await?;

        Ok(reviews)
    }

    /// Applies a signed vote delta to a review.
    ///
    /// # Arguments
    /// - `param` - Review id and vote delta
    ///
    /// # Returns
    /// - `Ok(Review)` - Review with its updated vote count
    /// - `Err(AppError::ReviewErr(NotFound))` - No review with that id
    /// - `Err(AppError::ReviewErr(InvalidInput))` - The new count would overflow
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_votes(&self, param: UpdateVotesParam) -> Result<Review, AppError> {
        ReviewRepository::new(self.db).update_votes(&param).await
    }
}
