use super::*;

/// Tests incrementing a review's votes.
///
/// Expected: Ok with votes increased by one and the row persisted
#[tokio::test]
async fn increments_votes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes: 1,
        })
        .await?;

    assert_eq!(review.votes, 6);

    let stored = entity::prelude::Review::find_by_id(3).one(db).await?.unwrap();
    assert_eq!(stored.votes, 6);

    Ok(())
}

/// Tests that votes may drop below zero.
///
/// Expected: Ok with votes of 5 - 100
#[tokio::test]
async fn allows_negative_votes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes: -100,
        })
        .await?;

    assert_eq!(review.votes, -95);

    Ok(())
}

/// Tests that repeated updates accumulate and leave other reviews untouched.
///
/// Expected: Ok with review 3 at 5 + 10 - 3 and review 2 unchanged
#[tokio::test]
async fn accumulates_updates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    for inc_votes in [10, -3] {
        repo.update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes,
        })
        .await?;
    }

    let updated = entity::prelude::Review::find_by_id(3).one(db).await?.unwrap();
    let untouched = entity::prelude::Review::find_by_id(2).one(db).await?.unwrap();
    assert_eq!(updated.votes, 12);
    assert_eq!(untouched.votes, 5);

    Ok(())
}

/// Tests updating a review id that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_review_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .update_votes(&UpdateVotesParam {
            review_id: 999999,
            inc_votes: 10,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::NotFound))
    ));

    Ok(())
}

/// Tests a delta that would push the count past `i32::MAX`.
///
/// Expected: Err(InvalidInput) and the stored count unchanged, so later reads still work
#[tokio::test]
async fn rejects_overflowing_delta_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes: i32::MAX,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::InvalidInput))
    ));

    let stored = repo.get_by_id(3).await?.unwrap();
    assert_eq!(stored.review.votes, 5);
    let all = repo
        .get_all(&GetReviewsParam {
            category: None,
            sort_by: ReviewSortColumn::default(),
        })
        .await?;
    assert_eq!(all.len(), 13);

    Ok(())
}

/// Tests a delta that would push the count below `i32::MIN`.
///
/// Expected: Err(InvalidInput) after the count has already reached the floor
#[tokio::test]
async fn rejects_underflowing_delta() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let floor = repo
        .update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes: i32::MIN + 1,
        })
        .await?;
    assert_eq!(floor.votes, i32::MIN + 6);

    let result = repo
        .update_votes(&UpdateVotesParam {
            review_id: 3,
            inc_votes: -10,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::InvalidInput))
    ));
    let stored = entity::prelude::Review::find_by_id(3).one(db).await?.unwrap();
    assert_eq!(stored.votes, i32::MIN + 6);

    Ok(())
}
