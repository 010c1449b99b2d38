//! Favorite association repository for database operations.
//!
//! This module provides the `FavoriteRepository` for the three junction tables linking
//! users to characters, planets and vehicles. Rows are addressed by their composite
//! primary key `(user_id, entity_id)`; the `FavoriteKind` selects the table.
//!
//! The repository does not decide what a duplicate or dangling insert means. Constraint
//! violations are returned as `DbErr` for the service layer to classify.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::favorite::{Favorite, FavoriteKind};

/// Repository for user favorite junction rows.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to execute queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a favorite with the exact composite key exists.
    ///
    /// # Arguments
    /// - `kind` - Junction table to look in
    /// - `user_id` - ID of the user
    /// - `entity_id` - ID of the character, planet or vehicle
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite exists
    /// - `Ok(false)` - No favorite for that pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        let key = (user_id, entity_id);

        let exists = match kind {
            FavoriteKind::Character => entity::prelude::CharacterFavorite::find_by_id(key)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Planet => entity::prelude::PlanetFavorite::find_by_id(key)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Vehicle => entity::prelude::VehicleFavorite::find_by_id(key)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(exists)
    }

    /// Inserts a favorite row.
    ///
    /// Does not check if the favorite already exists. The composite primary key rejects
    /// a duplicate and the foreign keys reject an unknown user or entity, both surfacing
    /// as a `DbErr` whose `sql_err()` identifies the violated constraint.
    ///
    /// # Arguments
    /// - `kind` - Junction table to insert into
    /// - `user_id` - ID of the user
    /// - `entity_id` - ID of the character, planet or vehicle
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Constraint violation or other database error
    pub async fn create(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<Favorite, DbErr> {
        let favorite = match kind {
            FavoriteKind::Character => Favorite::from_character_entity(
                entity::character_favorite::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    character_id: ActiveValue::Set(entity_id),
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Planet => Favorite::from_planet_entity(
                entity::planet_favorite::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planet_id: ActiveValue::Set(entity_id),
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Vehicle => Favorite::from_vehicle_entity(
                entity::vehicle_favorite::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    vehicle_id: ActiveValue::Set(entity_id),
                }
                .insert(self.db)
                .await?,
            ),
        };

        Ok(favorite)
    }

    /// Deletes the favorite with the given composite key.
    ///
    /// # Arguments
    /// - `kind` - Junction table to delete from
    /// - `user_id` - ID of the user
    /// - `entity_id` - ID of the character, planet or vehicle
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite existed and was deleted
    /// - `Ok(false)` - No favorite for that pair, nothing changed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        let key = (user_id, entity_id);

        let result = match kind {
            FavoriteKind::Character => {
                entity::prelude::CharacterFavorite::delete_by_id(key)
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::PlanetFavorite::delete_by_id(key)
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Vehicle => {
                entity::prelude::VehicleFavorite::delete_by_id(key)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }
}
