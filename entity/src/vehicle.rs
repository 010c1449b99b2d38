use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_name = "model")]
    pub vehicle_model: String,
    pub vehicle_class: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub manufacturer: String,
    pub crew: String,
    pub length: f64,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_favorite::Entity")]
    VehicleFavorite,
}

impl Related<super::vehicle_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
