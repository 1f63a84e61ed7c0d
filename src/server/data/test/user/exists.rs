use super::*;

/// Tests that an inserted user is reported as existing.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists(&user.username).await?);

    Ok(())
}

/// Tests that usernames are matched exactly.
///
/// Expected: Ok(false) for a differently-cased username
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::create_user_with_username(db, "bainesface").await?;

    let repo = UserRepository::new(db);

    assert!(!repo.exists("BAINESFACE").await?);
    assert!(!repo.exists("").await?);

    Ok(())
}
