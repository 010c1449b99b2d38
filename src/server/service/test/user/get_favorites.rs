use super::*;

/// Tests aggregating favorites across the three catalog types.
///
/// Expected: Ok(Favorites) with one entry per type
#[tokio::test]
async fn returns_favorites_of_every_kind() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let (user, character, planet, vehicle) = factory::create_user_with_favorites(db).await?;
    // Favorites of another user must not leak in
    factory::create_user_with_favorites(db).await?;

    let favorites = UserService::new(db).get_favorites(user.id).await.unwrap();

    assert_eq!(favorites.characters.len(), 1);
    assert_eq!(favorites.characters[0].id, character.id);
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].id, planet.id);
    assert_eq!(favorites.vehicles.len(), 1);
    assert_eq!(favorites.vehicles[0].id, vehicle.id);

    Ok(())
}

/// Tests an existing user with no favorites.
///
/// Expected: Ok(Favorites) with three empty lists
#[tokio::test]
async fn returns_empty_lists_for_user_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorites = UserService::new(db).get_favorites(user.id).await.unwrap();

    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.vehicles.is_empty());

    Ok(())
}

/// Tests requesting favorites of a user that does not exist.
///
/// Expected: Err(AppError::NotFound("not found"))
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_favorites(404).await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "not found"));

    Ok(())
}
