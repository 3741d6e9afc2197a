use chrono::Utc;
use entity::{station_mission::Difficulty, station_user_mission::MissionStatus};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{MissionModel, UserMissionModel},
    TestContext,
};

impl TestContext {
    pub fn mission<'a>(&'a mut self) -> MissionFixtures<'a> {
        MissionFixtures { setup: self }
    }
}

pub struct MissionFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> MissionFixtures<'a> {
    /// Insert an active mission that has not been completed yet.
    pub async fn insert_mission(&self, xp_reward: i64) -> Result<MissionModel, TestError> {
        Ok(
            entity::prelude::StationMission::insert(entity::station_mission::ActiveModel {
                title: ActiveValue::Set("Survey Europa".to_string()),
                description: ActiveValue::Set("Orbital survey of the ice shelf".to_string()),
                location: ActiveValue::Set("Europa".to_string()),
                duration: ActiveValue::Set("6 hours".to_string()),
                difficulty: ActiveValue::Set(Difficulty::Medium),
                xp_reward: ActiveValue::Set(xp_reward),
                min_level: ActiveValue::Set(1),
                is_active: ActiveValue::Set(true),
                is_completed: ActiveValue::Set(false),
                completed_at: ActiveValue::Set(None),
                completed_by: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mission that has already been completed by `completed_by`.
    pub async fn insert_completed_mission(
        &self,
        xp_reward: i64,
        completed_by: i32,
    ) -> Result<MissionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::StationMission::insert(entity::station_mission::ActiveModel {
                title: ActiveValue::Set("Repair Solar Array".to_string()),
                description: ActiveValue::Set("Spacewalk to replace a panel".to_string()),
                location: ActiveValue::Set("Low Orbit".to_string()),
                duration: ActiveValue::Set("4 hours".to_string()),
                difficulty: ActiveValue::Set(Difficulty::Hard),
                xp_reward: ActiveValue::Set(xp_reward),
                min_level: ActiveValue::Set(2),
                is_active: ActiveValue::Set(true),
                is_completed: ActiveValue::Set(true),
                completed_at: ActiveValue::Set(Some(now)),
                completed_by: ActiveValue::Set(Some(completed_by)),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a progress record for a user on a mission with the provided status.
    pub async fn insert_progress(
        &self,
        user_id: i32,
        mission_id: i32,
        status: MissionStatus,
        xp_earned: i64,
    ) -> Result<UserMissionModel, TestError> {
        let now = Utc::now().naive_utc();
        let completed_at = match status {
            MissionStatus::Completed => Some(now),
            MissionStatus::NotStarted | MissionStatus::InProgress | MissionStatus::Failed => None,
        };

        Ok(entity::prelude::StationUserMission::insert(
            entity::station_user_mission::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                mission_id: ActiveValue::Set(mission_id),
                status: ActiveValue::Set(status),
                started_at: ActiveValue::Set(now),
                completed_at: ActiveValue::Set(completed_at),
                xp_earned: ActiveValue::Set(xp_earned),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Fetch a mission's current record.
    pub async fn reload(&self, mission_id: i32) -> Result<Option<MissionModel>, TestError> {
        Ok(entity::prelude::StationMission::find_by_id(mission_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Fetch the progress record for a (user, mission) pair.
    pub async fn progress(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<Option<UserMissionModel>, TestError> {
        Ok(entity::prelude::StationUserMission::find()
            .filter(entity::station_user_mission::Column::UserId.eq(user_id))
            .filter(entity::station_user_mission::Column::MissionId.eq(mission_id))
            .one(&self.setup.db)
            .await?)
    }

    /// Count progress records for a mission.
    pub async fn count_progress(&self, mission_id: i32) -> Result<u64, TestError> {
        use sea_orm::PaginatorTrait;

        Ok(entity::prelude::StationUserMission::find()
            .filter(entity::station_user_mission::Column::MissionId.eq(mission_id))
            .count(&self.setup.db)
            .await?)
    }
}
