use super::*;

/// Tests fetching an existing user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let user = UserService::new(db).get_by_id(created.id).await.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.username, created.username);

    Ok(())
}

/// Tests fetching a missing user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_by_id(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
