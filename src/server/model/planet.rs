use crate::model::planet::PlanetDto;

/// Catalog planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub terrain: String,
    pub climate: String,
    pub diameter: f64,
    pub gravity: f64,
    pub orbital_period: f64,
    pub rotation_period: f64,
    pub population: f64,
    pub is_active: bool,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            terrain: entity.terrain,
            climate: entity.climate,
            diameter: entity.diameter,
            gravity: entity.gravity,
            orbital_period: entity.orbital_period,
            rotation_period: entity.rotation_period,
            population: entity.population,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            terrain: self.terrain,
            climate: self.climate,
            diameter: self.diameter,
            gravity: self.gravity,
            orbital_period: self.orbital_period,
            rotation_period: self.rotation_period,
            population: self.population,
            is_active: self.is_active,
        }
    }
}
