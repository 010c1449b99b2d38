use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto, vehicle::VehicleDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Everything a user has favorited, grouped by catalog type.
///
/// Each list is always present, empty when the user has no favorites of that type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
    pub vehicles: Vec<VehicleDto>,
}
