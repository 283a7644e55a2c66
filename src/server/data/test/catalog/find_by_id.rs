use super::*;

/// Tests finding a catalog item of each kind.
///
/// Expected: Ok(Some) with name and url of the inserted row
#[tokio::test]
async fn finds_item_of_each_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = CatalogRepository::new(db);

    for (kind, record) in [
        (CatalogKind::Character, &character),
        (CatalogKind::Vehicle, &vehicle),
        (CatalogKind::Planet, &planet),
    ] {
        let item = repo.find_by_id(kind, record.id).await?.unwrap();
        assert_eq!(item.kind, kind);
        assert_eq!(item.id, record.id);
        assert_eq!(item.name, record.name);
        assert_eq!(item.url, record.url);
    }

    Ok(())
}

/// Tests that an id is looked up in the table of the requested kind only.
///
/// A character with id 1 exists but no planet does.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_kind_with_same_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = CatalogRepository::new(db);
    let planet = repo.find_by_id(CatalogKind::Planet, character.id).await?;

    assert!(planet.is_none());

    Ok(())
}
