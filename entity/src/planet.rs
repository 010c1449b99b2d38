use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorite,
}

impl Related<super::planet_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
