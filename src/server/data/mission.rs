use chrono::{NaiveDateTime, Utc};
use entity::station_mission::Difficulty;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Fields accepted when creating a mission, defaults already applied.
pub struct NewMission {
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub xp_reward: i64,
    pub min_level: i32,
}

/// Partial update of a mission's catalogue fields.
///
/// Completion state is deliberately absent, it only changes through
/// [`MissionRepository::lock`] and [`MissionRepository::unlock_all`].
#[derive(Default)]
pub struct MissionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub xp_reward: Option<i64>,
    pub min_level: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active, unlocked mission
    pub async fn create(
        &self,
        mission: NewMission,
    ) -> Result<entity::station_mission::Model, DbErr> {
        let mission = entity::station_mission::ActiveModel {
            title: ActiveValue::Set(mission.title),
            description: ActiveValue::Set(mission.description),
            location: ActiveValue::Set(mission.location),
            duration: ActiveValue::Set(mission.duration),
            difficulty: ActiveValue::Set(mission.difficulty),
            xp_reward: ActiveValue::Set(mission.xp_reward),
            min_level: ActiveValue::Set(mission.min_level),
            is_active: ActiveValue::Set(true),
            is_completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
            completed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        mission.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        mission_id: i32,
    ) -> Result<Option<entity::station_mission::Model>, DbErr> {
        entity::prelude::StationMission::find_by_id(mission_id)
            .one(self.db)
            .await
    }

    /// Whether any mission, active or not, already uses `title`
    pub async fn title_exists(&self, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::StationMission::find()
            .filter(entity::station_mission::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all active missions, newest first
    pub async fn get_active(&self) -> Result<Vec<entity::station_mission::Model>, DbErr> {
        entity::prelude::StationMission::find()
            .filter(entity::station_mission::Column::IsActive.eq(true))
            .order_by_desc(entity::station_mission::Column::CreatedAt)
            .order_by_desc(entity::station_mission::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        mission_id: i32,
        update: MissionUpdate,
    ) -> Result<Option<entity::station_mission::Model>, DbErr> {
        let mission = match entity::prelude::StationMission::find_by_id(mission_id)
            .one(self.db)
            .await?
        {
            Some(mission) => mission,
            None => return Ok(None),
        };

        let mut mission_am = mission.into_active_model();
        if let Some(title) = update.title {
            mission_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = update.description {
            mission_am.description = ActiveValue::Set(description);
        }
        if let Some(location) = update.location {
            mission_am.location = ActiveValue::Set(location);
        }
        if let Some(duration) = update.duration {
            mission_am.duration = ActiveValue::Set(duration);
        }
        if let Some(difficulty) = update.difficulty {
            mission_am.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(xp_reward) = update.xp_reward {
            mission_am.xp_reward = ActiveValue::Set(xp_reward);
        }
        if let Some(min_level) = update.min_level {
            mission_am.min_level = ActiveValue::Set(min_level);
        }
        if let Some(is_active) = update.is_active {
            mission_am.is_active = ActiveValue::Set(is_active);
        }

        let mission = mission_am.update(self.db).await?;

        Ok(Some(mission))
    }

    /// Deletes a mission
    ///
    /// Returns OK regardless of mission existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, mission_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StationMission::delete_by_id(mission_id)
            .exec(self.db)
            .await
    }

    /// Compare-and-set of the mission's completion flag from false to true
    ///
    /// The `is_completed = false` predicate is part of the UPDATE itself, so of several
    /// concurrent callers at most one sees an affected row.
    ///
    /// # Returns
    /// - `Ok(true)` - This call locked the mission
    /// - `Ok(false)` - The mission does not exist or was already locked
    pub async fn lock(
        &self,
        mission_id: i32,
        completed_by: i32,
        completed_at: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::StationMission::update_many()
            .col_expr(entity::station_mission::Column::IsCompleted, Expr::value(true))
            .col_expr(
                entity::station_mission::Column::CompletedAt,
                Expr::value(completed_at),
            )
            .col_expr(
                entity::station_mission::Column::CompletedBy,
                Expr::value(completed_by),
            )
            .filter(entity::station_mission::Column::Id.eq(mission_id))
            .filter(entity::station_mission::Column::IsCompleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Clears the completion state of every locked mission
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of missions that were locked before the call
    pub async fn unlock_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::StationMission::update_many()
            .col_expr(
                entity::station_mission::Column::IsCompleted,
                Expr::value(false),
            )
            .col_expr(
                entity::station_mission::Column::CompletedAt,
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .col_expr(
                entity::station_mission::Column::CompletedBy,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::station_mission::Column::IsCompleted.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes `user_id` as the recorded completer of any mission, leaving the lock in place
    pub async fn clear_completed_by(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::StationMission::update_many()
            .col_expr(
                entity::station_mission::Column::CompletedBy,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::station_mission::Column::CompletedBy.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
