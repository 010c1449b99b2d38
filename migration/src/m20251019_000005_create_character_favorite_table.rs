use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_user_table::User;
use super::m20251019_000002_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterFavorite::Table)
                    .if_not_exists()
                    .col(integer(CharacterFavorite::UserId))
                    .col(integer(CharacterFavorite::CharacterId))
                    .primary_key(
                        Index::create()
                            .name("pk_characters_favorites")
                            .col(CharacterFavorite::UserId)
                            .col(CharacterFavorite::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characters_favorites_user_id")
                            .from(CharacterFavorite::Table, CharacterFavorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characters_favorites_character_id")
                            .from(CharacterFavorite::Table, CharacterFavorite::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterFavorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterFavorite {
    #[sea_orm(iden = "characters_favorites")]
    Table,
    UserId,
    CharacterId,
}
