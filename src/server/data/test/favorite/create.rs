use super::*;

/// Tests inserting a favorite.
///
/// Expected: Ok with stored kind, target and user
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(FavoriteParam {
            kind: CatalogKind::Planet,
            entity_id: planet.id,
            user_id: user.id,
        })
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.kind, CatalogKind::Planet);
    assert_eq!(favorite.entity_id, planet.id);
    assert_eq!(repo.get_by_user(user.id).await?, vec![favorite]);

    Ok(())
}

/// Tests that the migrated schema rejects a second identical favorite.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_with_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteRepository::new(db);
    let param = FavoriteParam {
        kind: CatalogKind::Character,
        entity_id: character.id,
        user_id: user.id,
    };

    repo.create(param).await?;
    let result = repo.create(param).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
