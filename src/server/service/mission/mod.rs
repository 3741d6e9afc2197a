//! Mission service layer.
//!
//! This module contains the mission catalogue, per crew member progress tracking, the global
//! completion ledger and the reward engine that credits the whole crew when a mission is
//! completed.

pub mod catalogue;
pub mod ledger;
pub mod reward;
pub mod tracker;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use entity::station_mission::Difficulty;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::mission::{
        CompletionDto, CreateMissionDto, CrewMissionDto, CrewMissionStatusDto, MissionDetailDto,
        MissionDto, ProgressDto, ResetSummaryDto, StartMissionDto, UpdateMissionDto,
    },
    server::{
        data::{
            mission::{MissionRepository, MissionUpdate, NewMission},
            user::UserRepository,
            user_mission::UserMissionRepository,
        },
        error::{mission::MissionError, Error},
        service::mission::{
            catalogue::STARTER_MISSIONS, reward::RewardEngine, tracker::ProgressTracker,
        },
        util::input::required_field,
    },
};

/// Reward for missions created without an explicit `xp_reward`.
pub const DEFAULT_XP_REWARD: i64 = 100;
/// Minimum level for missions created without an explicit `min_level`.
pub const DEFAULT_MIN_LEVEL: i32 = 1;

/// Service for the mission catalogue and mission lifecycle.
pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new instance of [`MissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active missions, newest first, with the crew member's own status for each.
    ///
    /// # Arguments
    /// - `user_id` - ID of the crew member whose progress is merged into the listing
    ///
    /// # Returns
    /// - `Ok(Vec<CrewMissionDto>)` - Missions with `available` status where no progress exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<CrewMissionDto>, Error> {
        let missions = MissionRepository::new(self.db).get_active().await?;
        let progress_by_mission: HashMap<i32, _> = UserMissionRepository::new(self.db)
            .get_many_by_user(user_id)
            .await?
            .into_iter()
            .map(|progress| (progress.mission_id, progress))
            .collect();

        Ok(missions
            .into_iter()
            .map(|mission| {
                let progress = progress_by_mission.get(&mission.id);

                CrewMissionDto {
                    status: CrewMissionStatusDto::from(progress.map(|p| p.status)),
                    progress_id: progress.map(|p| p.id),
                    xp_earned: progress.map(|p| p.xp_earned).unwrap_or(0),
                    mission: mission.into(),
                }
            })
            .collect())
    }

    /// Retrieves a mission along with the number of crew members who have a progress record on it.
    ///
    /// # Returns
    /// - `Ok(MissionDetailDto)` - Mission found
    /// - `Err(MissionError::NotFound)` - No mission with this ID
    pub async fn get_mission(&self, mission_id: i32) -> Result<MissionDetailDto, Error> {
        let mission = MissionRepository::new(self.db)
            .get_by_id(mission_id)
            .await?
            .ok_or(MissionError::NotFound(mission_id))?;

        let progress_count = UserMissionRepository::new(self.db)
            .count_by_mission(mission_id)
            .await?;

        Ok(MissionDetailDto {
            mission: mission.into(),
            progress_count,
        })
    }

    /// Adds every starter mission whose title is not in the catalogue yet.
    ///
    /// Safe to run on every startup, existing missions are never modified.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of missions created
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn seed_catalogue(&self) -> Result<u64, Error> {
        let mission_repo = MissionRepository::new(self.db);
        let mut created = 0;

        for starter in STARTER_MISSIONS.iter() {
            if mission_repo.title_exists(starter.title).await? {
                continue;
            }

            let mission = mission_repo.create(NewMission::from(starter)).await?;
            tracing::debug!(
                mission_id = %mission.id,
                title = %mission.title,
                "Starter mission created"
            );
            created += 1;
        }

        tracing::info!(created = %created, "Starter mission catalogue seeded");

        Ok(created)
    }

    /// Creates a mission, applying defaults for difficulty, reward and minimum level.
    ///
    /// # Returns
    /// - `Ok(MissionDto)` - The created mission
    /// - `Err(Error::Validation)` - A required field is empty, the reward is not positive
    ///   or the minimum level is below 1
    pub async fn create_mission(&self, payload: CreateMissionDto) -> Result<MissionDto, Error> {
        let title = required_field("Title", payload.title)?;
        let description = required_field("Description", payload.description)?;
        let location = required_field("Location", payload.location)?;
        let duration = required_field("Duration", payload.duration)?;

        let xp_reward = payload.xp_reward.unwrap_or(DEFAULT_XP_REWARD);
        let min_level = payload.min_level.unwrap_or(DEFAULT_MIN_LEVEL);
        validate_reward(xp_reward)?;
        validate_min_level(min_level)?;

        let mission = MissionRepository::new(self.db)
            .create(NewMission {
                title,
                description,
                location,
                duration,
                difficulty: payload
                    .difficulty
                    .map(Difficulty::from)
                    .unwrap_or(Difficulty::Medium),
                xp_reward,
                min_level,
            })
            .await?;

        tracing::info!(mission_id = %mission.id, "Mission created");

        Ok(mission.into())
    }

    /// Updates a mission's catalogue fields, completion state is left as is.
    ///
    /// # Returns
    /// - `Ok(MissionDto)` - The updated mission
    /// - `Err(MissionError::NotFound)` - No mission with this ID
    /// - `Err(Error::Validation)` - A provided field is empty or out of range
    pub async fn update_mission(
        &self,
        mission_id: i32,
        payload: UpdateMissionDto,
    ) -> Result<MissionDto, Error> {
        if let Some(xp_reward) = payload.xp_reward {
            validate_reward(xp_reward)?;
        }
        if let Some(min_level) = payload.min_level {
            validate_min_level(min_level)?;
        }

        let update = MissionUpdate {
            title: payload
                .title
                .map(|v| required_field("Title", v))
                .transpose()?,
            description: payload
                .description
                .map(|v| required_field("Description", v))
                .transpose()?,
            location: payload
                .location
                .map(|v| required_field("Location", v))
                .transpose()?,
            duration: payload
                .duration
                .map(|v| required_field("Duration", v))
                .transpose()?,
            difficulty: payload.difficulty.map(Difficulty::from),
            xp_reward: payload.xp_reward,
            min_level: payload.min_level,
            is_active: payload.is_active,
        };

        let mission = MissionRepository::new(self.db)
            .update(mission_id, update)
            .await?
            .ok_or(MissionError::NotFound(mission_id))?;

        Ok(mission.into())
    }

    /// Deletes a mission and every progress record referencing it in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Mission and its progress records deleted
    /// - `Err(MissionError::NotFound)` - No mission with this ID, nothing deleted
    pub async fn delete_mission(&self, mission_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let progress_removed = UserMissionRepository::new(&txn)
            .delete_by_mission(mission_id)
            .await?
            .rows_affected;
        let result = MissionRepository::new(&txn).delete(mission_id).await?;

        if result.rows_affected == 0 {
            return Err(MissionError::NotFound(mission_id).into());
        }

        txn.commit().await?;

        tracing::info!(
            mission_id = %mission_id,
            progress_removed = %progress_removed,
            "Mission deleted"
        );

        Ok(())
    }

    /// Starts a mission for the crew member.
    ///
    /// See [`ProgressTracker::start`] for the status rules.
    pub async fn start(&self, user_id: i32, mission_id: i32) -> Result<StartMissionDto, Error> {
        let txn = self.db.begin().await?;

        let outcome = ProgressTracker::new(&txn).start(user_id, mission_id).await?;

        txn.commit().await?;

        Ok(StartMissionDto {
            progress: outcome.progress.into(),
            already_started: outcome.already_started,
        })
    }

    /// Resets the crew member's progress on a mission back to in progress.
    pub async fn retry(&self, user_id: i32, mission_id: i32) -> Result<ProgressDto, Error> {
        let progress = ProgressTracker::new(self.db)
            .retry(user_id, mission_id)
            .await?;

        Ok(progress.into())
    }

    /// Completes a mission and rewards the whole crew, see [`RewardEngine::complete_mission`].
    pub async fn complete(&self, user_id: i32, mission_id: i32) -> Result<CompletionDto, Error> {
        RewardEngine::new(self.db)
            .complete_mission(user_id, mission_id)
            .await
    }

    /// Returns the station to its initial state in one transaction.
    ///
    /// Deletes every progress record, unlocks every mission and resets every crew member
    /// to 0 XP at level 1.
    pub async fn reset_all(&self) -> Result<ResetSummaryDto, Error> {
        let txn = self.db.begin().await?;

        let progress_removed = UserMissionRepository::new(&txn)
            .delete_all()
            .await?
            .rows_affected;
        let missions_unlocked = MissionRepository::new(&txn).unlock_all().await?;
        let users_reset = UserRepository::new(&txn).reset_all_progress().await?;

        txn.commit().await?;

        tracing::info!(
            progress_removed = %progress_removed,
            missions_unlocked = %missions_unlocked,
            users_reset = %users_reset,
            "Station mission state reset"
        );

        Ok(ResetSummaryDto {
            progress_removed,
            missions_unlocked,
            users_reset,
        })
    }
}

fn validate_reward(xp_reward: i64) -> Result<(), Error> {
    if xp_reward <= 0 {
        return Err(Error::Validation(
            "XP reward must be a positive number".to_string(),
        ));
    }

    Ok(())
}

fn validate_min_level(min_level: i32) -> Result<(), Error> {
    if min_level < 1 {
        return Err(Error::Validation(
            "Minimum level must be at least 1".to_string(),
        ));
    }

    Ok(())
}
