use super::*;

/// Tests that an empty catalog is an error rather than an empty list.
///
/// Expected: Err(AppError::NotFound("not found"))
#[tokio::test]
async fn returns_not_found_when_catalog_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = CharacterService::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "not found"));

    Ok(())
}

/// Tests listing a populated catalog.
///
/// Expected: Ok(vec) ordered by ID
#[tokio::test]
async fn returns_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;

    let characters = CharacterService::new(db).get_all().await.unwrap();

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
