use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VehicleDto {
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
