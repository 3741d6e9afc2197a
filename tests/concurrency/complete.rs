use entity::{station_mission::Difficulty, station_user_mission::MissionStatus};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, TransactionTrait};
use starbase::server::{
    data::mission::{MissionRepository, NewMission},
    error::{mission::MissionError, Error},
    service::mission::reward::RewardEngine,
};

use super::*;

const REWARD: i64 = 300;

/// Expect one winner when both completions pass the availability check before either locks,
/// with the loser rolled back and every crew member credited exactly once
#[tokio::test]
async fn interleaved_completions_credit_crew_once() -> Result<(), TestError> {
    let pg = PostgresTest::new().await?;
    let a = pg.insert_user("vega@station.test", 0).await?;
    let b = pg.insert_user("orion@station.test", 450).await?;
    let bystander = pg.insert_user("lyra@station.test", 1200).await?;
    let before = [(a.id, a.xp), (b.id, b.xp), (bystander.id, bystander.xp)];

    let mission = MissionRepository::new(&pg.db)
        .create(NewMission {
            title: "Seal Hull Breach".to_string(),
            description: "Patch the breach in ring two".to_string(),
            location: "Habitat Ring".to_string(),
            duration: "1 hour".to_string(),
            difficulty: Difficulty::Hard,
            xp_reward: REWARD,
            min_level: 1,
        })
        .await?;

    // Hold the mission row so both completions queue at the lock write
    let gate = pg.db.begin().await?;
    gate.execute_unprepared(&format!(
        "SELECT id FROM station_mission WHERE id = {} FOR NO KEY UPDATE",
        mission.id
    ))
    .await?;

    let engine = RewardEngine::new(&pg.db);
    let release = async {
        let queued = pg.wait_for_lock_waiters(2).await;
        let released = gate.commit().await;
        (queued, released)
    };

    let (result_a, result_b, (queued, released)) = tokio::join!(
        engine.complete_mission(a.id, mission.id),
        engine.complete_mission(b.id, mission.id),
        release,
    );
    released?;
    assert!(queued?, "both completions should wait on the mission row");

    let outcomes = [(a.id, result_a), (b.id, result_b)];
    let winners: Vec<i32> = outcomes
        .iter()
        .filter(|(_, result)| result.is_ok())
        .map(|(user_id, _)| *user_id)
        .collect();
    assert_eq!(winners.len(), 1);
    let winner_id = winners[0];

    let (loser_id, loser_result) = outcomes
        .iter()
        .find(|(_, result)| result.is_err())
        .unwrap();
    assert!(matches!(
        loser_result,
        Err(Error::MissionError(MissionError::Conflict(id))) if *id == mission.id
    ));

    // The loser's progress row was rolled back with the rest of its transaction
    let loser_progress = entity::prelude::StationUserMission::find()
        .filter(entity::station_user_mission::Column::UserId.eq(*loser_id))
        .filter(entity::station_user_mission::Column::MissionId.eq(mission.id))
        .one(&pg.db)
        .await?;
    assert!(loser_progress.is_none());

    let winner_progress = entity::prelude::StationUserMission::find()
        .filter(entity::station_user_mission::Column::UserId.eq(winner_id))
        .filter(entity::station_user_mission::Column::MissionId.eq(mission.id))
        .one(&pg.db)
        .await?
        .unwrap();
    assert_eq!(winner_progress.status, MissionStatus::Completed);
    assert_eq!(winner_progress.xp_earned, REWARD);

    for (user_id, xp_before) in before {
        let user = entity::prelude::StationUser::find_by_id(user_id)
            .one(&pg.db)
            .await?
            .unwrap();
        assert_eq!(user.xp - xp_before, REWARD);
        assert_eq!(user.level as i64, user.xp / 500 + 1);
    }

    let mission = entity::prelude::StationMission::find_by_id(mission.id)
        .one(&pg.db)
        .await?
        .unwrap();
    assert!(mission.is_completed);
    assert_eq!(mission.completed_by, Some(winner_id));

    Ok(())
}
