use super::*;

use test_utils::factory::planet::PlanetFactory;

/// Tests that stored fields, including floating point measurements, are returned intact.
///
/// Expected: Ok(Some(Planet)) equal to what was inserted
#[tokio::test]
async fn returns_stored_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let created = PlanetFactory::new(db)
        .name("Tatooine")
        .climate("arid")
        .population(200000.0)
        .build()
        .await?;

    let planet = PlanetRepository::new(db).find_by_id(created.id).await?;

    assert!(planet.is_some());
    let planet = planet.unwrap();
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate, "arid");
    assert_eq!(planet.population, 200000.0);
    assert_eq!(planet.terrain, created.terrain);
    assert_eq!(planet.diameter, created.diameter);
    assert_eq!(planet.gravity, created.gravity);
    assert_eq!(planet.orbital_period, created.orbital_period);
    assert_eq!(planet.rotation_period, created.rotation_period);
    assert!(planet.is_active);

    Ok(())
}

/// Tests querying for a non-existent planet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db).find_by_id(1).await?;

    assert!(planet.is_none());

    Ok(())
}
