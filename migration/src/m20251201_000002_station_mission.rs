use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_station_user::StationUser;

static FK_MISSION_COMPLETED_BY: &str = "fk-station_mission-completed_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationMission::Table)
                    .if_not_exists()
                    .col(pk_auto(StationMission::Id))
                    .col(string(StationMission::Title))
                    .col(text(StationMission::Description))
                    .col(string(StationMission::Location))
                    .col(string(StationMission::Duration))
                    .col(string_len(StationMission::Difficulty, 16).default("medium"))
                    .col(big_integer(StationMission::XpReward).default(100))
                    .col(integer(StationMission::MinLevel).default(1))
                    .col(boolean(StationMission::IsActive).default(true))
                    .col(boolean(StationMission::IsCompleted).default(false))
                    .col(timestamp_null(StationMission::CompletedAt))
                    .col(integer_null(StationMission::CompletedBy))
                    .col(timestamp(StationMission::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_COMPLETED_BY)
                    .from_tbl(StationMission::Table)
                    .from_col(StationMission::CompletedBy)
                    .to_tbl(StationUser::Table)
                    .to_col(StationUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MISSION_COMPLETED_BY)
                    .table(StationMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StationMission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StationMission {
    Table,
    Id,
    Title,
    Description,
    Location,
    Duration,
    Difficulty,
    XpReward,
    MinLevel,
    IsActive,
    IsCompleted,
    CompletedAt,
    CompletedBy,
    CreatedAt,
}
