use super::*;

/// Tests fetching an existing character.
///
/// Expected: Ok(Character) with the stored name
#[tokio::test]
async fn returns_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;

    let character = CharacterService::new(db)
        .get_by_id(created.id)
        .await
        .unwrap();

    assert_eq!(character.name, created.name);

    Ok(())
}

/// Tests fetching a character that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = CharacterService::new(db).get_by_id(12).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
