use super::*;

/// Tests that an empty user table is reported as not found.
///
/// Expected: Err(AppError::NotFound("not found"))
#[tokio::test]
async fn returns_not_found_when_no_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "not found"));

    Ok(())
}

/// Tests listing existing users.
///
/// Expected: Ok(vec) with every user
#[tokio::test]
async fn returns_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let users = UserService::new(db).get_all().await.unwrap();

    assert_eq!(users.len(), 2);

    Ok(())
}
