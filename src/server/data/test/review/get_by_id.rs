use super::*;

/// Tests fetching a review that has comments.
///
/// Expected: Ok(Some) with comment_count matching the inserted comments
#[tokio::test]
async fn returns_review_with_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, user, review) = create_review_with_dependencies(db).await?;

    factory::create_comment(db, review.review_id, &user.username).await?;
    factory::create_comment(db, review.review_id, &user.username).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(review.review_id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.review.review_id, review.review_id);
    assert_eq!(result.review.title, review.title);
    assert_eq!(result.review.owner, user.username);
    assert_eq!(result.comment_count, 2);

    Ok(())
}

/// Tests fetching a review with no comments.
///
/// Expected: Ok(Some) with comment_count 0
#[tokio::test]
async fn returns_zero_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, review) = create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(review.review_id).await?.unwrap();

    assert_eq!(result.comment_count, 0);

    Ok(())
}

/// Tests that comments on other reviews are not counted.
///
/// Expected: Ok(Some) with comment_count 0 for the uncommented review
#[tokio::test]
async fn ignores_comments_on_other_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (category, user, commented) = create_review_with_dependencies(db).await?;
    let quiet = factory::create_review(db, &category.slug, &user.username).await?;

    CommentFactory::new(db, commented.review_id, &user.username)
        .body("first!")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(
        repo.get_by_id(commented.review_id).await?.unwrap().comment_count,
        1
    );
    assert_eq!(repo.get_by_id(quiet.review_id).await?.unwrap().comment_count, 0);

    Ok(())
}

/// Tests fetching a review id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.get_by_id(999999).await?.is_none());

    Ok(())
}
