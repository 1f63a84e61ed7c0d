use super::*;

/// Tests a category referenced by reviews.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_used_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.category_in_use("dexterity").await?);
    assert!(repo.category_in_use("social deduction").await?);

    Ok(())
}

/// Tests a category present in the categories table with no reviews.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unused_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(!repo.category_in_use("children's games").await?);

    Ok(())
}

/// Tests a slug that does not exist at all.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(!repo.category_in_use("nonexistent").await?);

    Ok(())
}
