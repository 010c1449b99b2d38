//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    terrain: String,
    climate: String,
    diameter: f64,
    gravity: f64,
    orbital_period: f64,
    rotation_period: f64,
    population: f64,
    is_active: bool,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults describe a desert world named `"Planet {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            terrain: "desert".to_string(),
            climate: "arid".to_string(),
            diameter: 10465.0,
            gravity: 1.0,
            orbital_period: 304.0,
            rotation_period: 23.0,
            population: 200000.0,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = climate.into();
        self
    }

    pub fn population(mut self, population: f64) -> Self {
        self.population = population;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            terrain: ActiveValue::Set(self.terrain),
            climate: ActiveValue::Set(self.climate),
            diameter: ActiveValue::Set(self.diameter),
            gravity: ActiveValue::Set(self.gravity),
            orbital_period: ActiveValue::Set(self.orbital_period),
            rotation_period: ActiveValue::Set(self.rotation_period),
            population: ActiveValue::Set(self.population),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
