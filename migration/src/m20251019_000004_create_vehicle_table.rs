use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len_uniq(Vehicle::Name, 120))
                    .col(string_len(Vehicle::Model, 120))
                    .col(string_len(Vehicle::VehicleClass, 70))
                    .col(string_len(Vehicle::CargoCapacity, 30))
                    .col(string_len(Vehicle::Consumables, 30))
                    .col(string_len(Vehicle::Manufacturer, 170))
                    .col(string_len(Vehicle::Crew, 20))
                    .col(double(Vehicle::Length))
                    .col(boolean(Vehicle::IsActive))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    CargoCapacity,
    Consumables,
    Manufacturer,
    Crew,
    Length,
    IsActive,
}
