//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// Catalog names, usernames and emails carry UNIQUE constraints, so every
/// factory-created row is suffixed with a fresh counter value.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who has favorited one character, one planet and one vehicle.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character, planet, vehicle))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorites(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::planet::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;

    crate::factory::favorite::create_character_favorite(db, user.id, character.id).await?;
    crate::factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;
    crate::factory::favorite::create_vehicle_favorite(db, user.id, vehicle.id).await?;

    Ok((user, character, planet, vehicle))
}
