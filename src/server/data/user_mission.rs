use chrono::{NaiveDateTime, Utc};
use entity::station_user_mission::MissionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
};

pub struct UserMissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserMissionRepository<'a, C> {
    /// Creates a new instance of [`UserMissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an in-progress record for the (user, mission) pair
    ///
    /// Fails with a unique constraint violation when a record already exists for the pair.
    pub async fn create(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<entity::station_user_mission::Model, DbErr> {
        let progress = entity::station_user_mission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            mission_id: ActiveValue::Set(mission_id),
            status: ActiveValue::Set(MissionStatus::InProgress),
            started_at: ActiveValue::Set(Utc::now().naive_utc()),
            completed_at: ActiveValue::Set(None),
            xp_earned: ActiveValue::Set(0),
            ..Default::default()
        };

        progress.insert(self.db).await
    }

    pub async fn get_by_user_and_mission(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<Option<entity::station_user_mission::Model>, DbErr> {
        entity::prelude::StationUserMission::find()
            .filter(entity::station_user_mission::Column::UserId.eq(user_id))
            .filter(entity::station_user_mission::Column::MissionId.eq(mission_id))
            .one(self.db)
            .await
    }

    /// Gets every progress record belonging to a user
    pub async fn get_many_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::station_user_mission::Model>, DbErr> {
        entity::prelude::StationUserMission::find()
            .filter(entity::station_user_mission::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn count_by_mission(&self, mission_id: i32) -> Result<u64, DbErr> {
        entity::prelude::StationUserMission::find()
            .filter(entity::station_user_mission::Column::MissionId.eq(mission_id))
            .count(self.db)
            .await
    }

    /// Puts an existing record back in progress with a fresh start time
    ///
    /// Clears `completed_at` and `xp_earned` regardless of the record's previous status.
    pub async fn restart(
        &self,
        progress: entity::station_user_mission::Model,
    ) -> Result<entity::station_user_mission::Model, DbErr> {
        let mut progress_am = progress.into_active_model();
        progress_am.status = ActiveValue::Set(MissionStatus::InProgress);
        progress_am.started_at = ActiveValue::Set(Utc::now().naive_utc());
        progress_am.completed_at = ActiveValue::Set(None);
        progress_am.xp_earned = ActiveValue::Set(0);

        progress_am.update(self.db).await
    }

    /// Marks a record completed, recording the XP it earned
    pub async fn mark_completed(
        &self,
        progress: entity::station_user_mission::Model,
        xp_earned: i64,
        completed_at: NaiveDateTime,
    ) -> Result<entity::station_user_mission::Model, DbErr> {
        let mut progress_am = progress.into_active_model();
        progress_am.status = ActiveValue::Set(MissionStatus::Completed);
        progress_am.completed_at = ActiveValue::Set(Some(completed_at));
        progress_am.xp_earned = ActiveValue::Set(xp_earned);

        progress_am.update(self.db).await
    }

    pub async fn delete_by_mission(&self, mission_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StationUserMission::delete_many()
            .filter(entity::station_user_mission::Column::MissionId.eq(mission_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StationUserMission::delete_many()
            .filter(entity::station_user_mission::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::StationUserMission::delete_many()
            .exec(self.db)
            .await
    }
}
