use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository, error::AppError, model::vehicle::Vehicle,
    service::NOT_FOUND_MSG,
};

/// Service providing read access to catalog vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new VehicleService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all vehicles ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - At least one vehicle
    /// - `Err(AppError::NotFound)` - The catalog is empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        if vehicles.is_empty() {
            return Err(AppError::NotFound(NOT_FOUND_MSG.to_string()));
        }

        Ok(vehicles)
    }

    /// Retrieves a vehicle by ID.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The vehicle
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))
    }
}
