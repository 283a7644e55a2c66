use super::*;

/// Tests that listing one kind does not leak rows from the other catalog tables.
///
/// Expected: Ok with only the vehicles
#[tokio::test]
async fn returns_only_requested_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db).await?;
    let first = factory::create_vehicle(db).await?;
    let second = factory::create_vehicle(db).await?;
    factory::create_planet(db).await?;

    let repo = CatalogRepository::new(db);
    let vehicles = repo.get_all(CatalogKind::Vehicle).await?;

    assert_eq!(vehicles.len(), 2);
    assert!(vehicles.iter().all(|v| v.kind == CatalogKind::Vehicle));
    assert_eq!(vehicles[0].name, first.name);
    assert_eq!(vehicles[1].name, second.name);

    Ok(())
}

/// Tests listing a kind with no rows.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db).await?;

    let repo = CatalogRepository::new(db);
    let planets = repo.get_all(CatalogKind::Planet).await?;

    assert!(planets.is_empty());

    Ok(())
}
