use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::mission::MissionRepository,
    error::{mission::MissionError, Error},
    model::db::MissionModel,
};

/// Global completion state of missions.
///
/// The first successful completion of a mission locks it for every crew member. The ledger
/// runs on whatever connection it is given, the reward engine hands it the completion
/// transaction so that the lock commits or rolls back together with the XP fan-out.
pub struct MissionLedger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionLedger<'a, C> {
    /// Creates a new instance of [`MissionLedger`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the mission if it can still be completed.
    ///
    /// # Returns
    /// - `Ok(MissionModel)` - Mission exists and has not been completed
    /// - `Err(MissionError::NotFound)` - No mission with this ID
    /// - `Err(MissionError::CompletedByRequester)` - `requester_id` holds the lock
    /// - `Err(MissionError::AlreadyCompleted)` - Another crew member holds the lock
    pub async fn check_available(
        &self,
        mission_id: i32,
        requester_id: i32,
    ) -> Result<MissionModel, Error> {
        let mission = MissionRepository::new(self.db)
            .get_by_id(mission_id)
            .await?
            .ok_or(MissionError::NotFound(mission_id))?;

        if mission.is_completed {
            if mission.completed_by == Some(requester_id) {
                return Err(MissionError::CompletedByRequester(mission_id).into());
            }
            return Err(MissionError::AlreadyCompleted(mission_id).into());
        }

        Ok(mission)
    }

    /// Locks the mission, attributing the completion to `completed_by`.
    ///
    /// # Returns
    /// - `Ok(())` - This call performed the lock
    /// - `Err(MissionError::Conflict)` - Another completion locked the mission first
    pub async fn lock(
        &self,
        mission_id: i32,
        completed_by: i32,
        completed_at: NaiveDateTime,
    ) -> Result<(), Error> {
        let locked = MissionRepository::new(self.db)
            .lock(mission_id, completed_by, completed_at)
            .await?;

        if !locked {
            return Err(MissionError::Conflict(mission_id).into());
        }

        tracing::info!(
            mission_id = %mission_id,
            completed_by = %completed_by,
            "Mission locked"
        );

        Ok(())
    }
}
