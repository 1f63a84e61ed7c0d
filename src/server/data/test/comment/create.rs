use super::*;

/// Tests inserting a comment on an existing review.
///
/// Verifies the server assigns the id, timestamp and zero votes.
///
/// Expected: Ok(Comment) persisted with the given author and body
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    let before = Utc::now();

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParam {
            review_id: 4,
            author: "bainesface".to_string(),
            body: "great game".to_string(),
        })
        .await?;

    assert_eq!(comment.comment_id, 7);
    assert_eq!(comment.review_id, 4);
    assert_eq!(comment.author, "bainesface");
    assert_eq!(comment.body, "great game");
    assert_eq!(comment.votes, 0);
    assert!(comment.created_at >= before);

    let stored = entity::prelude::Comment::find_by_id(7).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests inserting a comment by a user that does not exist.
///
/// Expected: Err(ReviewErr(InvalidInput)) and nothing inserted
#[tokio::test]
async fn rejects_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParam {
            review_id: 4,
            author: "nobody".to_string(),
            body: "great game".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::InvalidInput))
    ));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 6);

    Ok(())
}

/// Tests inserting a comment on a review that does not exist.
///
/// Expected: Err(ReviewErr(InvalidInput))
#[tokio::test]
async fn rejects_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParam {
            review_id: 999999,
            author: "bainesface".to_string(),
            body: "great game".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::InvalidInput))
    ));

    Ok(())
}
