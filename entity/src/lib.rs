//! SeaORM entities for the catalog and favorites tables.

pub mod prelude;

pub mod character;
pub mod character_favorite;
pub mod planet;
pub mod planet_favorite;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicle;
pub mod vehicle_favorite;
