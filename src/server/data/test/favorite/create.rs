use super::*;

use sea_orm::SqlErr;

/// Tests creating a favorite of each kind.
///
/// Expected: Ok(Favorite) carrying the kind and composite key
#[tokio::test]
async fn creates_favorite_for_every_kind() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let repo = FavoriteRepository::new(db);

    let favorite = repo
        .create(FavoriteKind::Character, user.id, character.id)
        .await?;
    assert_eq!(favorite.kind, FavoriteKind::Character);
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.entity_id, character.id);

    let favorite = repo.create(FavoriteKind::Planet, user.id, planet.id).await?;
    assert_eq!(favorite.entity_id, planet.id);

    let favorite = repo.create(FavoriteKind::Vehicle, user.id, vehicle.id).await?;
    assert_eq!(favorite.entity_id, vehicle.id);

    assert!(repo.exists(FavoriteKind::Planet, user.id, planet.id).await?);

    Ok(())
}

/// Tests that a second insert of the same pair is rejected by the composite key.
///
/// Expected: Err with a unique constraint violation, one row left
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(FavoriteKind::Planet, user.id, planet.id).await?;
    let result = repo.create(FavoriteKind::Planet, user.id, planet.id).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::PlanetFavorite::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a favorite pointing at a missing entity is rejected.
///
/// Expected: Err with a foreign key violation, no row inserted
#[tokio::test]
async fn rejects_unknown_entity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteRepository::new(db)
        .create(FavoriteKind::Vehicle, user.id, 9999)
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::VehicleFavorite::find().count(db).await?, 0);

    Ok(())
}
