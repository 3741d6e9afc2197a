use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationUser::Table)
                    .if_not_exists()
                    .col(pk_auto(StationUser::Id))
                    .col(string_uniq(StationUser::Email))
                    .col(string(StationUser::Name))
                    .col(string(StationUser::PasswordHash))
                    .col(string_len(StationUser::Role, 16).default("regular"))
                    .col(big_integer(StationUser::Xp).default(0))
                    .col(integer(StationUser::Level).default(1))
                    .col(timestamp(StationUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StationUser {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    Xp,
    Level,
    CreatedAt,
}
