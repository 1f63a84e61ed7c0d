//! Inserts the seed dataset described in `crate::fixture`.
//!
//! Rows are inserted parents first (categories, users, reviews, comments). Review and
//! comment IDs are left to the database, so on an empty database they come out as 1..n
//! in dataset order.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::fixture;

/// Seeds all four tables with the fixture dataset.
///
/// # Arguments
/// - `db` - Database connection with the reviews schema already created
///
/// # Returns
/// - `Ok(())` - All rows inserted
/// - `Err(DbErr)` - Database error during insert (e.g. the dataset was already seeded)
pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    let categories = fixture::category::dataset()
        .into_iter()
        .map(|category| entity::category::ActiveModel {
            slug: ActiveValue::Set(category.slug),
            description: ActiveValue::Set(category.description),
        });
    entity::prelude::Category::insert_many(categories)
        .exec(db)
        .await?;

    let users = fixture::user::dataset()
        .into_iter()
        .map(|user| entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            name: ActiveValue::Set(user.name),
            avatar_url: ActiveValue::Set(user.avatar_url),
        });
    entity::prelude::User::insert_many(users).exec(db).await?;

    let reviews = fixture::review::dataset()
        .into_iter()
        .map(|review| entity::review::ActiveModel {
            review_id: ActiveValue::NotSet,
            title: ActiveValue::Set(review.title),
            category: ActiveValue::Set(review.category),
            designer: ActiveValue::Set(review.designer),
            owner: ActiveValue::Set(review.owner),
            review_body: ActiveValue::Set(review.review_body),
            review_img_url: ActiveValue::Set(review.review_img_url),
            created_at: ActiveValue::Set(review.created_at),
            votes: ActiveValue::Set(review.votes),
        });
    entity::prelude::Review::insert_many(reviews)
        .exec(db)
        .await?;

    let comments = fixture::comment::dataset()
        .into_iter()
        .map(|comment| entity::comment::ActiveModel {
            comment_id: ActiveValue::NotSet,
            author: ActiveValue::Set(comment.author),
            review_id: ActiveValue::Set(comment.review_id),
            body: ActiveValue::Set(comment.body),
            votes: ActiveValue::Set(comment.votes),
            created_at: ActiveValue::Set(comment.created_at),
        });
    entity::prelude::Comment::insert_many(comments)
        .exec(db)
        .await?;

    Ok(())
}
