use chrono::Utc;
use entity::station_user_mission::MissionStatus;
use sea_orm::{ConnectionTrait, SqlErr};

use crate::server::{
    data::user_mission::UserMissionRepository,
    error::{mission::MissionError, Error},
    model::db::UserMissionModel,
    service::mission::ledger::MissionLedger,
};

/// Result of starting a mission.
pub struct StartOutcome {
    pub progress: UserMissionModel,
    /// The record was already in progress and was returned unchanged
    pub already_started: bool,
}

/// Per crew member lifecycle of a mission attempt.
///
/// Records move `NotStarted -> InProgress -> Completed | Failed` and are only changed by
/// start, retry and completion.
pub struct ProgressTracker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgressTracker<'a, C> {
    /// Creates a new instance of [`ProgressTracker`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Starts a mission for a crew member.
    ///
    /// # Behavior
    /// - An in-progress record is returned unchanged with `already_started` set
    /// - A completed record is rejected with `CompletedByRequester`
    /// - A failed or not started record is restarted with a fresh start time
    /// - Without a record, a new in-progress record is created
    ///
    /// # Returns
    /// - `Ok(StartOutcome)` - The in-progress record
    /// - `Err(MissionError::NotFound)` - No mission with this ID
    /// - `Err(MissionError::AlreadyCompleted)` - Mission is locked by another crew member
    /// - `Err(MissionError::CompletedByRequester)` - This crew member already completed it
    /// - `Err(MissionError::Conflict)` - A concurrent start created the record first
    pub async fn start(&self, user_id: i32, mission_id: i32) -> Result<StartOutcome, Error> {
        MissionLedger::new(self.db)
            .check_available(mission_id, user_id)
            .await?;

        let repo = UserMissionRepository::new(self.db);
        let existing = repo.get_by_user_and_mission(user_id, mission_id).await?;

        let (progress, already_started) = match existing {
            Some(progress) => match progress.status {
                MissionStatus::InProgress => (progress, true),
                MissionStatus::Completed => {
                    return Err(MissionError::CompletedByRequester(mission_id).into())
                }
                MissionStatus::NotStarted | MissionStatus::Failed => {
                    (repo.restart(progress).await?, false)
                }
            },
            None => (self.create(user_id, mission_id).await?, false),
        };

        Ok(StartOutcome {
            progress,
            already_started,
        })
    }

    /// Puts a crew member's existing record back in progress.
    ///
    /// Allowed from any status, including completed. Retrying never re-triggers a reward since
    /// completion is gated by the mission's global lock.
    ///
    /// # Returns
    /// - `Ok(UserMissionModel)` - The reset record
    /// - `Err(MissionError::ProgressNotFound)` - The crew member never started this mission
    pub async fn retry(&self, user_id: i32, mission_id: i32) -> Result<UserMissionModel, Error> {
        let repo = UserMissionRepository::new(self.db);

        let progress = repo
            .get_by_user_and_mission(user_id, mission_id)
            .await?
            .ok_or(MissionError::ProgressNotFound {
                user_id,
                mission_id,
            })?;

        Ok(repo.restart(progress).await?)
    }

    /// Returns the crew member's record for the mission, creating an in-progress one if missing
    pub async fn ensure_progress(
        &self,
        user_id: i32,
        mission_id: i32,
    ) -> Result<UserMissionModel, Error> {
        let repo = UserMissionRepository::new(self.db);

        match repo.get_by_user_and_mission(user_id, mission_id).await? {
            Some(progress) => Ok(progress),
            None => self.create(user_id, mission_id).await,
        }
    }

    /// Marks a record completed with the XP it earned, no XP balance changes here
    pub async fn mark_completed(
        &self,
        progress: UserMissionModel,
        xp_earned: i64,
    ) -> Result<UserMissionModel, Error> {
        Ok(UserMissionRepository::new(self.db)
            .mark_completed(progress, xp_earned, Utc::now().naive_utc())
            .await?)
    }

    async fn create(&self, user_id: i32, mission_id: i32) -> Result<UserMissionModel, Error> {
        UserMissionRepository::new(self.db)
            .create(user_id, mission_id)
            .await
            .map_err(|err| match err.sql_err() {
                // A concurrent request inserted the (user, mission) record first
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    MissionError::Conflict(mission_id).into()
                }
                _ => Error::DbErr(err),
            })
    }
}
