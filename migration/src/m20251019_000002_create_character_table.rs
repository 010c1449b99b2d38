use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 120))
                    .col(string_len(Character::Gender, 10))
                    .col(string_len(Character::SkinColor, 30))
                    .col(string_len(Character::HairColor, 30))
                    .col(double(Character::Height))
                    .col(string_len(Character::EyeColor, 30))
                    .col(double(Character::Mass))
                    .col(string_len(Character::BirthYear, 30))
                    .col(boolean(Character::IsActive))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    Id,
    Name,
    Gender,
    SkinColor,
    HairColor,
    Height,
    EyeColor,
    Mass,
    BirthYear,
    IsActive,
}
