use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_user_table::User;
use super::m20251019_000004_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleFavorite::Table)
                    .if_not_exists()
                    .col(integer(VehicleFavorite::UserId))
                    .col(integer(VehicleFavorite::VehicleId))
                    .primary_key(
                        Index::create()
                            .name("pk_vehicles_favorites")
                            .col(VehicleFavorite::UserId)
                            .col(VehicleFavorite::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_favorites_user_id")
                            .from(VehicleFavorite::Table, VehicleFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_favorites_vehicle_id")
                            .from(VehicleFavorite::Table, VehicleFavorite::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleFavorite {
    #[sea_orm(iden = "vehicles_favorites")]
    Table,
    UserId,
    VehicleId,
}
