use super::*;

/// Tests listing the seeded comments of a review.
///
/// Expected: Ok with comments 5, 1, 4 (newest first)
#[tokio::test]
async fn returns_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_review_id(2).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, vec![5, 1, 4]);
    assert!(comments.iter().all(|c| c.review_id == 2));

    Ok(())
}

/// Tests ordering of comments inserted out of chronological order.
///
/// Expected: Ok ordered by created_at, not by insertion
#[tokio::test]
async fn orders_by_created_at_not_insertion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, user, review) = create_review_with_dependencies(db).await?;
    let now = Utc::now();

    let older = CommentFactory::new(db, review.review_id, &user.username)
        .body("older")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = CommentFactory::new(db, review.review_id, &user.username)
        .body("newest")
        .created_at(now)
        .build()
        .await?;
    let middle = CommentFactory::new(db, review.review_id, &user.username)
        .body("middle")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_review_id(review.review_id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(
        ids,
        vec![newest.comment_id, middle.comment_id, older.comment_id]
    );

    Ok(())
}

/// Tests a review with no comments.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_uncommented_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_review_id(1).await?.is_empty());

    Ok(())
}
