use super::*;

/// Tests deleting an existing favorite.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let (user, character, _, _) = factory::create_user_with_favorites(db).await?;
    let repo = FavoriteRepository::new(db);

    let deleted = repo
        .delete(FavoriteKind::Character, user.id, character.id)
        .await?;

    assert!(deleted);
    assert!(
        !repo
            .exists(FavoriteKind::Character, user.id, character.id)
            .await?
    );

    Ok(())
}

/// Tests deleting a pair that was never favorited.
///
/// Expected: Ok(false) and other rows untouched
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let (user, _, planet, _) = factory::create_user_with_favorites(db).await?;
    let other_planet = factory::create_planet(db).await?;
    let repo = FavoriteRepository::new(db);

    let deleted = repo
        .delete(FavoriteKind::Planet, user.id, other_planet.id)
        .await?;

    assert!(!deleted);
    assert!(repo.exists(FavoriteKind::Planet, user.id, planet.id).await?);
    assert_eq!(entity::prelude::PlanetFavorite::find().count(db).await?, 1);

    Ok(())
}
