//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vehicle_model: String,
    vehicle_class: String,
    cargo_capacity: String,
    consumables: String,
    manufacturer: String,
    crew: String,
    length: f64,
    is_active: bool,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults describe a wheeled crawler named `"Vehicle {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            vehicle_model: "Digger Crawler".to_string(),
            vehicle_class: "wheeled".to_string(),
            cargo_capacity: "50000".to_string(),
            consumables: "2 months".to_string(),
            manufacturer: "Corellia Mining Corporation".to_string(),
            crew: "46".to_string(),
            length: 36.8,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            vehicle_model: ActiveValue::Set(self.vehicle_model),
            vehicle_class: ActiveValue::Set(self.vehicle_class),
            cargo_capacity: ActiveValue::Set(self.cargo_capacity),
            consumables: ActiveValue::Set(self.consumables),
            manufacturer: ActiveValue::Set(self.manufacturer),
            crew: ActiveValue::Set(self.crew),
            length: ActiveValue::Set(self.length),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
