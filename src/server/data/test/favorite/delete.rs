use super::*;

/// Tests deleting an existing favorite.
///
/// Expected: Ok(true) and the favorite no longer listed
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let favorite = factory::create_favorite(db, user.id, &vehicle).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(favorite.id).await?;

    assert!(deleted);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a favorite id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}
