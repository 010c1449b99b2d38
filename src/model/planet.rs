use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanetDto {
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
