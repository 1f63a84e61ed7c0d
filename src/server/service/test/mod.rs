use crate::server::error::{review::ReviewError, AppError};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext, seed::seed};


/// Builds a context with the reviews schema and the seed dataset loaded.
async fn seeded() -> TestContext {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    seed(test.db.as_ref().unwrap()).await.unwrap();
    test
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}

fn assert_review_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: ReviewError) {
    match result {
        Err(AppError::ReviewErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
