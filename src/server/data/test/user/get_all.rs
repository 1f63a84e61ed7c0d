use super::*;

/// Tests listing every user of the seed dataset.
///
/// Expected: Ok with all 4 users ordered by username
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(
        usernames,
        vec!["bainesface", "dav3rid", "mallionaire", "philippaclaire9"]
    );

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
