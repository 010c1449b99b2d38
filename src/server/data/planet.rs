//! Planet data repository for database operations.
//!
//! This module provides the `PlanetRepository` for reading planets from the catalog,
//! including the planets a given user has favorited through the
//! `planets_favorites` junction table.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::planet::Planet;

/// Repository providing read access to catalog planets.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to execute queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves every planet ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planets, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, planet_id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Retrieves the planets favorited by a user, ordered by planet ID.
    ///
    /// Joins through `planets_favorites`. Does not check that the user exists; an
    /// unknown user simply has no favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to load
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - Favorited planets, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_favorited_by_user(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .inner_join(entity::prelude::PlanetFavorite)
            .filter(entity::planet_favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
