pub use super::character::Entity as Character;
pub use super::character_favorite::Entity as CharacterFavorite;
pub use super::planet::Entity as Planet;
pub use super::planet_favorite::Entity as PlanetFavorite;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_favorite::Entity as VehicleFavorite;
