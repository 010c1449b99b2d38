use super::*;

/// Expected: Err(AppError::NotFound) for an empty catalog
#[tokio::test]
async fn returns_not_found_when_catalog_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let result = VehicleService::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: Ok(vec) with the single vehicle
#[tokio::test]
async fn returns_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_vehicle(db).await?;

    let vehicles = VehicleService::new(db).get_all().await.unwrap();

    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, created.id);

    Ok(())
}
