use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderDto {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: GenderDto,
    pub skin_color: String,
    pub hair_color: String,
    pub height: f64,
    pub eye_color: String,
    pub mass: f64,
    pub birth_year: String,
    pub is_active: bool,
}
