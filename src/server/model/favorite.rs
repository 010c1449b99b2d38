//! Favorite association domain models.
//!
//! A favorite links a user to one catalog entity and is identified solely by the
//! `(user_id, entity_id)` pair within the table selected by its `FavoriteKind`.

use std::fmt;

/// Catalog type a favorite points at, selecting the junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    /// Lower-case name used in API messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link between a user and a favorited catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub entity_id: i32,
}

impl Favorite {
    pub fn from_character_entity(entity: entity::character_favorite::Model) -> Self {
        Self {
            kind: FavoriteKind::Character,
            user_id: entity.user_id,
            entity_id: entity.character_id,
        }
    }

    pub fn from_planet_entity(entity: entity::planet_favorite::Model) -> Self {
        Self {
            kind: FavoriteKind::Planet,
            user_id: entity.user_id,
            entity_id: entity.planet_id,
        }
    }

    pub fn from_vehicle_entity(entity: entity::vehicle_favorite::Model) -> Self {
        Self {
            kind: FavoriteKind::Vehicle,
            user_id: entity.user_id,
            entity_id: entity.vehicle_id,
        }
    }
}
