use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251201_000001_station_user::StationUser, m20251201_000002_station_mission::StationMission,
};

static IDX_USER_MISSION_USER_ID_MISSION_ID: &str = "idx-station_user_mission-user_id-mission_id";
static IDX_USER_MISSION_MISSION_ID: &str = "idx-station_user_mission-mission_id";
static FK_USER_MISSION_USER_ID: &str = "fk-station_user_mission-user_id";
static FK_USER_MISSION_MISSION_ID: &str = "fk-station_user_mission-mission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationUserMission::Table)
                    .if_not_exists()
                    .col(pk_auto(StationUserMission::Id))
                    .col(integer(StationUserMission::UserId))
                    .col(integer(StationUserMission::MissionId))
                    .col(string_len(StationUserMission::Status, 16).default("not_started"))
                    .col(timestamp(StationUserMission::StartedAt))
                    .col(timestamp_null(StationUserMission::CompletedAt))
                    .col(big_integer(StationUserMission::XpEarned).default(0))
                    .to_owned(),
            )
            .await?;

        // At most one progress record per (user, mission) pair
        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_MISSION_USER_ID_MISSION_ID)
                    .table(StationUserMission::Table)
                    .col(StationUserMission::UserId)
                    .col(StationUserMission::MissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_MISSION_MISSION_ID)
                    .table(StationUserMission::Table)
                    .col(StationUserMission::MissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_MISSION_USER_ID)
                    .from_tbl(StationUserMission::Table)
                    .from_col(StationUserMission::UserId)
                    .to_tbl(StationUser::Table)
                    .to_col(StationUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_MISSION_MISSION_ID)
                    .from_tbl(StationUserMission::Table)
                    .from_col(StationUserMission::MissionId)
                    .to_tbl(StationMission::Table)
                    .to_col(StationMission::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_MISSION_MISSION_ID)
                    .table(StationUserMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_MISSION_USER_ID)
                    .table(StationUserMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_MISSION_MISSION_ID)
                    .table(StationUserMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_MISSION_USER_ID_MISSION_ID)
                    .table(StationUserMission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StationUserMission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StationUserMission {
    Table,
    Id,
    UserId,
    MissionId,
    Status,
    StartedAt,
    CompletedAt,
    XpEarned,
}
