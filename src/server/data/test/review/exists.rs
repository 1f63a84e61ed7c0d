use super::*;

/// Tests existence checks for present and absent review ids.
///
/// Expected: Ok(true) for an inserted review, Ok(false) otherwise
#[tokio::test]
async fn reports_existing_reviews_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, review) = create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists(review.review_id).await?);
    assert!(!repo.exists(review.review_id + 1).await?);

    Ok(())
}
