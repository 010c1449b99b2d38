use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character_favorite::Entity")]
    CharacterFavorite,
}

impl Related<super::character_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CharacterFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
