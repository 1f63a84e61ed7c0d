//! Comment service for business logic.
//!
//! This module provides the `CommentService` for listing and posting review comments.
//! Referenced reviews and users are checked explicitly before any comment query or insert.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, review::ReviewRepository, user::UserRepository},
    error::{review::ReviewError, AppError},
    model::comment::{Comment, CreateCommentParam},
};

/// Service providing business logic for review comments.
pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the comments on a review, newest first.
    ///
    /// # Arguments
    /// - `review_id` - Review to list comments for
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the review; empty when it has none
    /// - `Err(AppError::ReviewErr(NotFound))` - No review with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_comments(&self, review_id: i32) -> Result<Vec<Comment>, AppError> {
        if !ReviewRepository::new(self.db).exists(review_id).await? {
            return Err(ReviewError::NotFound.into());
        }

        let comments = CommentRepository::new(self.db)
            .get_by_review_id(review_id)
            .await?;

        Ok(comments)
    }

    /// Posts a comment on a review.
    ///
    /// An unknown review or author is reported as invalid input rather than
    /// not found, since both arrive as fields of the request.
    ///
    /// # Arguments
    /// - `param` - Target review, author username and comment body
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment
    /// - `Err(AppError::ReviewErr(InvalidInput))` - Review or author does not exist
    /// - `Err(AppError::DbErr)` - Database error during checks or insert
    pub async fn create_comment(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        if !ReviewRepository::new(self.db).exists(param.review_id).await? {
            tracing::debug!("Comment rejected: review {} does not exist", param.review_id);
            return Err(ReviewError::InvalidInput.into());
        }

        if !UserRepository::new(self.db).exists(&param.author).await? {
            tracing::debug!("Comment rejected: user {:?} does not exist", param.author);
            return Err(ReviewError::InvalidInput.into());
        }

        CommentRepository::new(self.db).create(param).await
    }
}
