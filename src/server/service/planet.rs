use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository, error::AppError, model::planet::Planet,
    service::NOT_FOUND_MSG,
};

/// Service providing read access to catalog planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new PlanetService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all planets ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - At least one planet
    /// - `Err(AppError::NotFound)` - The catalog is empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        if planets.is_empty() {
            return Err(AppError::NotFound(NOT_FOUND_MSG.to_string()));
        }

        Ok(planets)
    }

    /// Retrieves a planet by ID.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The planet
    /// - `Err(AppError::NotFound)` - No planet with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(planet_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))
    }
}
