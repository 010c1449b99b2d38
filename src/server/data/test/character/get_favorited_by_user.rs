use super::*;

/// Tests that only the user's own favorites are returned, ordered by character ID.
///
/// Expected: Ok(vec) with the favorited characters only
#[tokio::test]
async fn returns_only_favorited_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let first = factory::create_character(db).await?;
    let not_favorited = factory::create_character(db).await?;
    let third = factory::create_character(db).await?;

    // Insert out of ID order to check ordering comes from the query
    factory::create_character_favorite(db, user.id, third.id).await?;
    factory::create_character_favorite(db, user.id, first.id).await?;
    factory::create_character_favorite(db, other_user.id, not_favorited.id).await?;

    let characters = CharacterRepository::new(db)
        .get_favorited_by_user(user.id)
        .await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests a user without favorites.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_vec_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_character(db).await?;

    let characters = CharacterRepository::new(db)
        .get_favorited_by_user(user.id)
        .await?;

    assert!(characters.is_empty());

    Ok(())
}
