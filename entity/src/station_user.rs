use sea_orm::entity::prelude::*;

/// Crew role, declared in ascending order of privilege.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "pilot")]
    Pilot,
    /// Administrative role
    #[sea_orm(string_value = "commander")]
    Commander,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "station_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    /// bcrypt hash, never serialized
    pub password_hash: String,
    pub role: Role,
    pub xp: i64,
    pub level: i32,
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
