use super::*;

use entity::sea_orm_active_enums::Gender as GenderEntity;
use test_utils::factory::character::CharacterFactory;

/// Tests that every stored field survives the trip through the repository.
///
/// Expected: Ok(Some(Character)) equal to what was inserted
#[tokio::test]
async fn returns_stored_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let created = CharacterFactory::new(db)
        .name("Leia Organa")
        .gender(GenderEntity::Female)
        .height(150.0)
        .mass(49.5)
        .is_active(false)
        .build()
        .await?;

    let character = CharacterRepository::new(db).find_by_id(created.id).await?;

    assert!(character.is_some());
    let character = character.unwrap();
    assert_eq!(character.id, created.id);
    assert_eq!(character.name, "Leia Organa");
    assert_eq!(character.gender, Gender::Female);
    assert_eq!(character.skin_color, created.skin_color);
    assert_eq!(character.hair_color, created.hair_color);
    assert_eq!(character.height, 150.0);
    assert_eq!(character.eye_color, created.eye_color);
    assert_eq!(character.mass, 49.5);
    assert_eq!(character.birth_year, created.birth_year);
    assert!(!character.is_active);

    Ok(())
}

/// Tests each stored gender label maps to its domain value.
///
/// Expected: Ok(Some(Character)) with the matching `Gender`
#[tokio::test]
async fn maps_every_gender() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();
    let repo = CharacterRepository::new(db);

    for (stored, expected) in [
        (GenderEntity::Male, Gender::Male),
        (GenderEntity::Female, Gender::Female),
        (GenderEntity::Other, Gender::Other),
    ] {
        let created = CharacterFactory::new(db).gender(stored).build().await?;

        let character = repo.find_by_id(created.id).await?.unwrap();

        assert_eq!(character.gender, expected);
    }

    Ok(())
}

/// Tests querying for a non-existent character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await?;
    let db = test.db.as_ref().unwrap();

    let character = CharacterRepository::new(db).find_by_id(7).await?;

    assert!(character.is_none());

    Ok(())
}
