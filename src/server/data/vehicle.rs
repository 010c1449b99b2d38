//! Vehicle data repository for database operations.
//!
//! This module provides the `VehicleRepository` for reading vehicles from the catalog,
//! including the vehicles a given user has favorited through the
//! `vehicles_favorites` junction table.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::vehicle::Vehicle;

/// Repository providing read access to catalog vehicles.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new VehicleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to execute queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves every vehicle ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - All vehicles, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    /// Finds a vehicle by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Vehicle found
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, vehicle_id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vehicle::from_entity))
    }

    /// Retrieves the vehicles favorited by a user, ordered by vehicle ID.
    ///
    /// Joins through `vehicles_favorites`. Does not check that the user exists; an
    /// unknown user simply has no favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to load
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - Favorited vehicles, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_favorited_by_user(&self, user_id: i32) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .inner_join(entity::prelude::VehicleFavorite)
            .filter(entity::vehicle_favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }
}
