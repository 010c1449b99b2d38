use super::*;

use test_utils::factory::vehicle::VehicleFactory;

/// Tests that the stored `model` column maps onto the vehicle model field.
///
/// Expected: Ok(Some(Vehicle)) equal to what was inserted
#[tokio::test]
async fn returns_stored_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let created = VehicleFactory::new(db)
        .name("Sand Crawler")
        .manufacturer("Corellia Mining Corporation")
        .length(36.8)
        .build()
        .await?;

    let vehicle = VehicleRepository::new(db).find_by_id(created.id).await?;

    assert!(vehicle.is_some());
    let vehicle = vehicle.unwrap();
    assert_eq!(vehicle.name, "Sand Crawler");
    assert_eq!(vehicle.model, created.vehicle_model);
    assert_eq!(vehicle.manufacturer, "Corellia Mining Corporation");
    assert_eq!(vehicle.length, 36.8);
    assert_eq!(vehicle.crew, created.crew);

    Ok(())
}

/// Tests querying for a non-existent vehicle.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let vehicle = VehicleRepository::new(db).find_by_id(1).await?;

    assert!(vehicle.is_none());

    Ok(())
}
