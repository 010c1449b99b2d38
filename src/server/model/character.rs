//! Character domain models.
//!
//! Owns the gender mapping from the stored label to the domain enum and on to the JSON label.

use entity::sea_orm_active_enums::Gender as GenderEntity;

use crate::model::character::{CharacterDto, GenderDto};

/// Gender of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Maps the stored label to the domain value.
    pub fn from_entity(entity: GenderEntity) -> Self {
        match entity {
            GenderEntity::Male => Self::Male,
            GenderEntity::Female => Self::Female,
            GenderEntity::Other => Self::Other,
        }
    }

    /// Maps the domain value to its API label (`"MALE"`, `"FEMALE"`, `"OTHER"`).
    pub fn into_dto(self) -> GenderDto {
        match self {
            Self::Male => GenderDto::Male,
            Self::Female => GenderDto::Female,
            Self::Other => GenderDto::Other,
        }
    }
}

/// Catalog character.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub skin_color: String,
    pub hair_color: String,
    pub height: f64,
    pub eye_color: String,
    pub mass: f64,
    pub birth_year: String,
    pub is_active: bool,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gender: Gender::from_entity(entity.gender),
            skin_color: entity.skin_color,
            hair_color: entity.hair_color,
            height: entity.height,
            eye_color: entity.eye_color,
            mass: entity.mass,
            birth_year: entity.birth_year,
            is_active: entity.is_active,
        }
    }

    /// Converts the character domain model to a DTO for API responses.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            gender: self.gender.into_dto(),
            skin_color: self.skin_color,
            hair_color: self.hair_color,
            height: self.height,
            eye_color: self.eye_color,
            mass: self.mass,
            birth_year: self.birth_year,
            is_active: self.is_active,
        }
    }
}
