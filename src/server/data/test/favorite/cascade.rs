use super::*;

/// Tests that deleting a user removes its rows from all three junction tables.
///
/// Expected: no favorites left for the user, other users untouched
#[tokio::test]
async fn user_deletion_clears_all_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::create_user_with_favorites(db).await?;
    let (other_user, other_character, _, _) = factory::create_user_with_favorites(db).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    assert_eq!(entity::prelude::CharacterFavorite::find().count(db).await?, 1);
    assert_eq!(entity::prelude::PlanetFavorite::find().count(db).await?, 1);
    assert_eq!(entity::prelude::VehicleFavorite::find().count(db).await?, 1);
    assert!(
        FavoriteRepository::new(db)
            .exists(FavoriteKind::Character, other_user.id, other_character.id)
            .await?
    );

    Ok(())
}

/// Tests that deleting a character removes only the rows pointing at it.
///
/// Expected: character favorites for that character gone, planet and vehicle favorites kept
#[tokio::test]
async fn character_deletion_clears_only_its_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let (user, character, planet, vehicle) = factory::create_user_with_favorites(db).await?;
    let kept_character = factory::create_character(db).await?;
    factory::create_character_favorite(db, user.id, kept_character.id).await?;

    entity::prelude::Character::delete_by_id(character.id)
        .exec(db)
        .await?;

    let repo = FavoriteRepository::new(db);
    assert!(
        !repo
            .exists(FavoriteKind::Character, user.id, character.id)
            .await?
    );
    assert!(
        repo.exists(FavoriteKind::Character, user.id, kept_character.id)
            .await?
    );
    assert!(repo.exists(FavoriteKind::Planet, user.id, planet.id).await?);
    assert!(repo.exists(FavoriteKind::Vehicle, user.id, vehicle.id).await?);
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_some());

    Ok(())
}
