use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::mission::CompletionDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::mission::{ledger::MissionLedger, tracker::ProgressTracker},
    },
};

/// Orchestrates a mission completion and the crew-wide reward it triggers.
///
/// Every step runs inside a single database transaction. If any step fails the transaction
/// is dropped without commit, which rolls back the progress update, the mission lock and the
/// XP fan-out together.
pub struct RewardEngine<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardEngine<'a> {
    /// Creates a new instance of [`RewardEngine`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Completes a mission on behalf of `requester_id` and rewards the whole crew.
    ///
    /// # Steps
    /// 1. Load the mission, failing if it is missing or already locked
    /// 2. Ensure the requester has a progress record, creating one if needed
    /// 3. Mark the record completed with the mission's reward as XP earned
    /// 4. Lock the mission with a compare-and-set attributing the requester
    /// 5. Increment every crew member's XP by the reward in one statement
    /// 6. Recompute every crew member's level in one statement
    ///
    /// # Arguments
    /// - `requester_id` - ID of the crew member completing the mission
    /// - `mission_id` - ID of the mission to complete
    ///
    /// # Returns
    /// - `Ok(CompletionDto)` - Summary of the completion and the number of crew rewarded
    /// - `Err(MissionError::NotFound)` - No mission with this ID
    /// - `Err(MissionError::CompletedByRequester)` - Requester already holds the completion
    /// - `Err(MissionError::AlreadyCompleted)` - Mission was locked before this request read it
    /// - `Err(MissionError::Conflict)` - Mission was locked by a concurrent request
    /// - `Err(AuthError::UserNotInDatabase)` - Requester was deleted during the request
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was committed
    pub async fn complete_mission(
        &self,
        requester_id: i32,
        mission_id: i32,
    ) -> Result<CompletionDto, Error> {
        let txn = self.db.begin().await?;

        let ledger = MissionLedger::new(&txn);
        let tracker = ProgressTracker::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let mission = ledger.check_available(mission_id, requester_id).await?;

        let requester = user_repo
            .get_by_id(requester_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(requester_id))?;

        let progress = tracker.ensure_progress(requester.id, mission.id).await?;
        tracker.mark_completed(progress, mission.xp_reward).await?;

        ledger
            .lock(mission.id, requester.id, Utc::now().naive_utc())
            .await?;

        let crew_rewarded = user_repo.credit_xp_to_all(mission.xp_reward).await?;
        user_repo.recompute_levels().await?;

        txn.commit().await?;

        tracing::info!(
            mission_id = %mission.id,
            completed_by = %requester.id,
            xp_reward = %mission.xp_reward,
            crew_rewarded = %crew_rewarded,
            "Mission completed, crew rewarded"
        );

        Ok(CompletionDto {
            mission_id: mission.id,
            mission_title: mission.title,
            xp_earned: mission.xp_reward,
            completed_by: requester.name,
            all_crew_rewarded: true,
            crew_rewarded,
        })
    }
}
