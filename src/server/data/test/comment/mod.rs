use crate::server::{
    data::comment::CommentRepository,
    error::{review::ReviewError, AppError},
    model::comment::CreateCommentParam,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{comment::CommentFactory, helpers::create_review_with_dependencies},
    seed::seed,
};

mod create;
mod get_by_review_id;
