use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_uniq(Planet::Name, 120))
                    .col(string_len(Planet::Terrain, 30))
                    .col(string_len(Planet::Climate, 30))
                    .col(double(Planet::Diameter))
                    .col(double(Planet::Gravity))
                    .col(double(Planet::OrbitalPeriod))
                    .col(double(Planet::RotationPeriod))
                    .col(double(Planet::Population))
                    .col(boolean(Planet::IsActive))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    #[sea_orm(iden = "planets")]
    Table,
    Id,
    Name,
    Terrain,
    Climate,
    Diameter,
    Gravity,
    OrbitalPeriod,
    RotationPeriod,
    Population,
    IsActive,
}
