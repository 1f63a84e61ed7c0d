use crate::server::{
    data::review::ReviewRepository,
    error::{review::ReviewError, AppError},
    model::review::{GetReviewsParam, ReviewSortColumn, ReviewWithCommentCount, UpdateVotesParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, comment::CommentFactory, helpers::create_review_with_dependencies},
    seed::seed,
};

mod category_in_use;
mod exists;
mod get_all;
mod get_by_id;
mod update_votes;

fn ids(reviews: &[ReviewWithCommentCount]) -> Vec<i32> {
    reviews.iter().map(|r| r.review.review_id).collect()
}
