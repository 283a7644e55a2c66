use super::*;

/// Tests listing a user's favorites across kinds.
///
/// Verifies that favorites of other users are excluded and kinds are preserved.
///
/// Expected: Ok with the user's two favorites in id order
#[tokio::test]
async fn returns_only_favorites_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;

    factory::create_favorite(db, user.id, &character).await?;
    factory::create_favorite(db, other.id, &character).await?;
    factory::create_favorite(db, user.id, &planet).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == user.id));
    assert_eq!(favorites[0].kind, CatalogKind::Character);
    assert_eq!(favorites[0].entity_id, character.id);
    assert_eq!(favorites[1].kind, CatalogKind::Planet);
    assert_eq!(favorites[1].entity_id, planet.id);

    Ok(())
}

/// Tests listing favorites for a user without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
