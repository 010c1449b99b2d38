//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::Gender;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Gender,
    skin_color: String,
    hair_color: String,
    height: f64,
    eye_color: String,
    mass: f64,
    birth_year: String,
    is_active: bool,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults describe a generic human with name `"Character {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            gender: Gender::Other,
            skin_color: "fair".to_string(),
            hair_color: "brown".to_string(),
            height: 172.0,
            eye_color: "blue".to_string(),
            mass: 77.0,
            birth_year: "19BBY".to_string(),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            skin_color: ActiveValue::Set(self.skin_color),
            hair_color: ActiveValue::Set(self.hair_color),
            height: ActiveValue::Set(self.height),
            eye_color: ActiveValue::Set(self.eye_color),
            mass: ActiveValue::Set(self.mass),
            birth_year: ActiveValue::Set(self.birth_year),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
