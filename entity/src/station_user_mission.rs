use sea_orm::entity::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MissionStatus {
    #[sea_orm(string_value = "not_started")]
    NotStarted,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
}

/// One crew member's attempt at one mission, unique per (user_id, mission_id).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "station_user_mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub mission_id: i32,
    pub status: MissionStatus,
    pub started_at: DateTime,
    pub completed_at: Option<DateTime>,
    pub xp_earned: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station_user::Entity",
        from = "Column::UserId",
        to = "super::station_user::Column::Id",
        on_delete = "Cascade"
    )]
    StationUser,
    #[sea_orm(
        belongs_to = "super::station_mission::Entity",
        from = "Column::MissionId",
        to = "super::station_mission::Column::Id",
        on_delete = "Cascade"
    )]
    StationMission,
}

impl Related<super::station_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationUser.def()
    }
}

impl Related<super::station_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationMission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
