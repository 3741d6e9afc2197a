use sea_orm::entity::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
    #[sea_orm(string_value = "extreme")]
    Extreme,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "station_mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub xp_reward: i64,
    pub min_level: i32,
    pub is_active: bool,
    /// Set once by the first successful completion, never cleared outside of a
    /// commander reset.
    pub is_completed: bool,
    pub completed_at: Option<DateTime>,
    pub completed_by: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::station_user_mission::Entity")]
    StationUserMission,
}

impl Related<super::station_user_mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationUserMission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
