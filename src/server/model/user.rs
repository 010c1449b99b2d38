//! User domain models.
//!
//! Provides the user account model and the aggregated favorites of a user, which is
//! how an association is presented to clients: as the favorited entity itself.

use crate::{
    model::user::{FavoritesDto, UserDto},
    server::model::{character::Character, planet::Planet, vehicle::Vehicle},
};

/// User account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Stored as provided, never interpreted.
    pub password: String,
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password: entity.password,
            is_active: entity.is_active,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            password: self.password,
            is_active: self.is_active,
        }
    }
}

/// Catalog entities a single user has favorited.
///
/// Each collection is ordered by entity ID. An empty collection stays an empty list
/// in the DTO rather than being omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
    pub vehicles: Vec<Vehicle>,
}

impl Favorites {
    /// Converts the favorites to the `{characters, planets, vehicles}` DTO.
    pub fn into_dto(self) -> FavoritesDto {
        FavoritesDto {
            characters: self.characters.into_iter().map(|c| c.into_dto()).collect(),
            planets: self.planets.into_iter().map(|p| p.into_dto()).collect(),
            vehicles: self.vehicles.into_iter().map(|v| v.into_dto()).collect(),
        }
    }
}
