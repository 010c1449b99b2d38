//! Factories for favorites junction rows.
//!
//! Favorites must reference existing users and catalog entities due to foreign key
//! constraints, so create the parents first.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to a character.
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::character_favorite::Model, DbErr> {
    entity::character_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
    }
    .insert(db)
    .await
}

/// Links a user to a planet.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::planet_favorite::Model, DbErr> {
    entity::planet_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
    }
    .insert(db)
    .await
}

/// Links a user to a vehicle.
pub async fn create_vehicle_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::vehicle_favorite::Model, DbErr> {
    entity::vehicle_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
    }
    .insert(db)
    .await
}
