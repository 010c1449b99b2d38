use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_user_table::User;
use super::m20251019_000003_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetFavorite::Table)
                    .if_not_exists()
                    .col(integer(PlanetFavorite::UserId))
                    .col(integer(PlanetFavorite::PlanetId))
                    .primary_key(
                        Index::create()
                            .name("pk_planets_favorites")
                            .col(PlanetFavorite::UserId)
                            .col(PlanetFavorite::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planets_favorites_user_id")
                            .from(PlanetFavorite::Table, PlanetFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planets_favorites_planet_id")
                            .from(PlanetFavorite::Table, PlanetFavorite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanetFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanetFavorite {
    #[sea_orm(iden = "planets_favorites")]
    Table,
    UserId,
    PlanetId,
}
