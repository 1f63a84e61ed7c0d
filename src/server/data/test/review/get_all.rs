use super::*;

/// Tests the default listing over the seed dataset.
///
/// Verifies every review is returned, newest first, each with its comment count.
///
/// Expected: Ok with 13 reviews ordered by created_at descending
#[tokio::test]
async fn returns_all_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam::from_query(None, None).unwrap())
        .await?;

    assert_eq!(ids(&reviews), vec![7, 4, 12, 5, 11, 10, 9, 8, 3, 2, 1, 6, 13]);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].review.created_at >= pair[1].review.created_at));

    Ok(())
}

/// Tests that comment counts are aggregated per review.
///
/// Expected: 3 for reviews 2 and 3, 0 for every other review
#[tokio::test]
async fn counts_comments_per_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam::from_query(None, None).unwrap())
        .await?;

    for review in &reviews {
        let expected = match review.review.review_id {
            2 | 3 => 3,
            _ => 0,
        };
        assert_eq!(
            review.comment_count, expected,
            "review {}",
            review.review.review_id
        );
    }

    Ok(())
}

/// Tests filtering by a category slug.
///
/// Expected: Ok with only the dexterity review
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam {
            category: Some("dexterity".to_string()),
            sort_by: ReviewSortColumn::CreatedAt,
        })
        .await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].review.title, "Jenga");
    assert_eq!(reviews[0].review.owner, "philippaclaire9");
    assert_eq!(reviews[0].comment_count, 3);

    Ok(())
}

/// Tests filtering by a category no review uses.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unused_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam {
            category: Some("children's games".to_string()),
            sort_by: ReviewSortColumn::CreatedAt,
        })
        .await?;

    assert!(reviews.is_empty());

    Ok(())
}

/// Tests sorting by votes with ties broken by review id.
///
/// Expected: review 12 (100 votes) first, then 13, then the tied 10 and 9
#[tokio::test]
async fn sorts_by_votes_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam {
            category: None,
            sort_by: ReviewSortColumn::Votes,
        })
        .await?;

    assert_eq!(ids(&reviews)[..4], [12, 13, 10, 9]);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].review.votes >= pair[1].review.votes));

    Ok(())
}

/// Tests sorting by the aggregated comment count.
///
/// Expected: the two commented reviews first, higher id first
#[tokio::test]
async fn sorts_by_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam {
            category: None,
            sort_by: ReviewSortColumn::CommentCount,
        })
        .await?;

    assert_eq!(reviews.len(), 13);
    assert_eq!(ids(&reviews)[..3], [3, 2, 13]);

    Ok(())
}

/// Tests sorting by review id.
///
/// Expected: ids 13 down to 1
#[tokio::test]
async fn sorts_by_review_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam {
            category: None,
            sort_by: ReviewSortColumn::ReviewId,
        })
        .await?;

    assert_eq!(ids(&reviews), (1..=13).rev().collect::<Vec<_>>());

    Ok(())
}

/// Tests listing on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&GetReviewsParam::from_query(None, None).unwrap())
        .await?;

    assert!(reviews.is_empty());

    Ok(())
}
