use crate::model::vehicle::VehicleDto;

/// Catalog vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub manufacturer: String,
    pub crew: String,
    pub length: f64,
    pub is_active: bool,
}

impl Vehicle {
    /// Converts an entity model to a vehicle domain model at the repository boundary.
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.vehicle_model,
            vehicle_class: entity.vehicle_class,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
            manufacturer: entity.manufacturer,
            crew: entity.crew,
            length: entity.length,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            vehicle_class: self.vehicle_class,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
            manufacturer: self.manufacturer,
            crew: self.crew,
            length: self.length,
            is_active: self.is_active,
        }
    }
}
