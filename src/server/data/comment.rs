//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::server::{
    error::{review::ReviewError, AppError},
    model::comment::{Comment, CreateCommentParam},
};

/// Repository providing database operations for review comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments on a review, newest first.
    ///
    /// Comments sharing a timestamp are ordered by `comment_id` descending.
    ///
    /// # Arguments
    /// - `review_id` - Review the comments belong to
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the review, empty if none (or if the review
    ///   does not exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a new comment stamped with the current time and zero votes.
    ///
    /// A foreign key violation (unknown author or review) is reported as
    /// `ReviewError::InvalidInput`, matching how callers validate payloads.
    ///
    /// # Arguments
    /// - `param` - Target review, author username and comment body
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment with its assigned id
    /// - `Err(AppError::ReviewErr(InvalidInput))` - Author or review does not exist
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        let entity = entity::comment::ActiveModel {
            comment_id: ActiveValue::NotSet,
            author: ActiveValue::Set(param.author),
            review_id: ActiveValue::Set(param.review_id),
            body: ActiveValue::Set(param.body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
        .map_err(classify_insert_error)?;

        Ok(Comment::from_entity(entity))
    }
}

fn classify_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ReviewError::InvalidInput.into(),
        _ => err.into(),
    }
}
