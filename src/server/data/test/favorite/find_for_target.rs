use super::*;

/// Tests the unscoped lookup used by the global duplicate check.
///
/// Expected: Ok(Some) with the other user's favorite
#[tokio::test]
async fn finds_favorite_of_any_user_without_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_favorite(db, owner.id, &vehicle).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_for_target(CatalogKind::Vehicle, vehicle.id, None)
        .await?;

    assert_eq!(found.map(|f| f.user_id), Some(owner.id));

    Ok(())
}

/// Tests the user-scoped lookup.
///
/// Expected: Ok(None) for another user, Ok(Some) for the owner
#[tokio::test]
async fn scopes_lookup_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::create_favorite(db, owner.id, &vehicle).await?;

    let repo = FavoriteRepository::new(db);

    let for_other = repo
        .find_for_target(CatalogKind::Vehicle, vehicle.id, Some(other.id))
        .await?;
    let for_owner = repo
        .find_for_target(CatalogKind::Vehicle, vehicle.id, Some(owner.id))
        .await?;

    assert!(for_other.is_none());
    assert!(for_owner.is_some());

    Ok(())
}

/// Tests that the kind discriminator is part of the match.
///
/// A character favorite with the same entity id must not match a planet lookup.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_favorite(db, user.id, &character).await?;

    let repo = FavoriteRepository::new(db);
    let found = repo
        .find_for_target(CatalogKind::Planet, character.id, None)
        .await?;

    assert!(found.is_none());

    Ok(())
}
