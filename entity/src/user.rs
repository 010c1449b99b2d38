use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_favorite::Entity")]
    CharacterFavorite,
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorite,
    #[sea_orm(has_many = "super::vehicle_favorite::Entity")]
    VehicleFavorite,
}

impl Related<super::character_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFavorite.def()
    }
}

impl Related<super::planet_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFavorite.def()
    }
}

impl Related<super::vehicle_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
