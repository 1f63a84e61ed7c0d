use super::*;

/// Tests listing every category of the seed dataset.
///
/// Expected: Ok with all 4 categories ordered by slug, including the unused one
#[tokio::test]
async fn returns_all_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["children's games", "dexterity", "euro game", "social deduction"]
    );

    Ok(())
}

/// Tests that descriptions are carried through to the domain model.
///
/// Expected: Ok with the factory-provided description
#[tokio::test]
async fn returns_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db)
        .slug("strategy")
        .description("Long-term planning games")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "strategy");
    assert_eq!(categories[0].description, "Long-term planning games");

    Ok(())
}

/// Tests listing categories on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
